use json_source_macros::json_source;

#[json_source("{\"speed\": 5}")]
fn cartesian(#[json_source("{\"wheels\": 4}")] _wheels: u8) {}

fn main() {}
