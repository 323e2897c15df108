use json_source_macros::json_source;

#[json_source(42)]
fn wrong(_id: u32) {}

fn main() {}
