use json_source_macros::json_source;

#[json_source("{\"id\": 1}")]
fn single(_id: u32) {}

fn main() {}
