use json_source_macros::json_source;

#[json_source("{\"id\": 1}")]
struct NotATest;

fn main() {}
