use json_source_macros::json_source;

#[json_source]
fn no_values() {}

fn main() {}
