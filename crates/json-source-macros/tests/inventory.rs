//! Behaviour tests for attribute-driven registration.

use json_source::{AttachmentPoint, JsonSource, TestPath, iter, lookup_source, sources_for_test};
use json_source_macros::json_source;

#[json_source("{\"id\": 1}", "[{\"id\": 2}, {\"id\": 3}]")]
fn customers(_id: u32) {}

#[json_source("{\"speed\": 5}")]
fn vehicles(#[json_source("{\"wheels\": 4}", "{\"wheels\": 6}")] _wheels: u8) {}

#[json_source("{\"kind\": \"matrix\"}")]
fn grid(#[json_source("\"z1\"")] _zeta: u8, #[json_source("\"a1\"")] _alpha: u8) {}

#[test]
fn annotated_functions_stay_callable() {
    // The attribute is declarative; the functions themselves do nothing.
    customers(1);
    vehicles(4);
    grid(1, 2);
}

#[test]
fn registers_method_source_with_values_in_order() {
    let path = concat!(module_path!(), "::customers");
    let source = lookup_source(TestPath::new(path), AttachmentPoint::Method)
        .unwrap_or_else(|| panic!("method source not registered"));
    assert_eq!(
        source.values,
        &["{\"id\": 1}", "[{\"id\": 2}, {\"id\": 3}]"][..]
    );
    assert_eq!(source.file, file!());
}

#[test]
fn single_literal_is_the_degenerate_sequence() {
    let path = concat!(module_path!(), "::vehicles");
    let source = lookup_source(TestPath::new(path), AttachmentPoint::Method)
        .unwrap_or_else(|| panic!("method source not registered"));
    assert_eq!(source.values, &["{\"speed\": 5}"][..]);
}

#[test]
fn registers_parameter_source() {
    let path = concat!(module_path!(), "::vehicles");
    let source = lookup_source(TestPath::new(path), AttachmentPoint::Parameter("_wheels"))
        .unwrap_or_else(|| panic!("parameter source not registered"));
    assert_eq!(source.values, &["{\"wheels\": 4}", "{\"wheels\": 6}"][..]);
    assert_eq!(source.attachment.parameter(), Some("_wheels"));
}

#[test]
fn sources_with_different_sequences_are_distinct() {
    let customers_path = concat!(module_path!(), "::customers");
    let vehicles_path = concat!(module_path!(), "::vehicles");
    let customers_source = lookup_source(TestPath::new(customers_path), AttachmentPoint::Method)
        .unwrap_or_else(|| panic!("customers source registered"));
    let vehicles_source = lookup_source(TestPath::new(vehicles_path), AttachmentPoint::Method)
        .unwrap_or_else(|| panic!("vehicles source registered"));
    assert_ne!(customers_source.values, vehicles_source.values);
    assert_ne!(customers_source.test_path, vehicles_source.test_path);
}

#[test]
fn lists_both_attachments_for_one_test() {
    let path = concat!(module_path!(), "::vehicles");
    let sources = sources_for_test(TestPath::new(path));
    let attachments: Vec<_> = sources.iter().map(|source| source.attachment).collect();
    assert_eq!(
        attachments,
        [
            AttachmentPoint::Method,
            AttachmentPoint::Parameter("_wheels")
        ]
    );
}

#[test]
fn parameter_sources_follow_signature_order_not_name_order() {
    // `_zeta` is declared before `_alpha`; alphabetical ordering would swap
    // them.
    let path = concat!(module_path!(), "::grid");
    let sources = sources_for_test(TestPath::new(path));
    let attachments: Vec<_> = sources.iter().map(|source| source.attachment).collect();
    assert_eq!(
        attachments,
        [
            AttachmentPoint::Method,
            AttachmentPoint::Parameter("_zeta"),
            AttachmentPoint::Parameter("_alpha")
        ]
    );
}

#[test]
fn inventory_iteration_sees_every_registration() {
    let registered = iter::<JsonSource>
        .into_iter()
        .filter(|source| source.test_path.starts_with(module_path!()))
        .count();
    assert_eq!(
        registered, 6,
        "three method sources and three parameter sources"
    );
}
