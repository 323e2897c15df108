use json_source_macros::json_source;

#[json_source("{\"id\": 1}", "[{\"id\": 2}, {\"id\": 3}]")]
fn multiple(_id: u32) {}

fn main() {}
