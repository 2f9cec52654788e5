//! Edge cases around separators, root paths, null nodes and the legacy
//! leaf-descent behaviors.

use json_prop::{
    add_property, delete_property, exists, get_property, update_property, Document, PropError,
};
use serde_json::{json, Value};

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture root must be an object"),
    }
}

#[test]
fn empty_separator_normalizes_to_dot() {
    let document = doc(json!({"one": {"two": [1, 2]}}));
    assert_eq!(get_property(&document, "one.two[1]", "").unwrap(), json!(2));
}

#[test]
fn custom_multichar_separator() {
    let mut document = doc(json!({"one": {"two": {"three": [1, 2, 3]}}}));
    assert_eq!(
        get_property(&document, "one::two::three[0]", "::").unwrap(),
        json!(1)
    );
    update_property(&mut document, "one::two::three[3]", "::", json!(4)).unwrap();
    assert_eq!(
        get_property(&document, "one::two::three", "::").unwrap(),
        json!([1, 2, 3, 4])
    );
}

#[test]
fn leading_and_doubled_separators_tolerated() {
    let document = doc(json!({"one": {"two": 2}}));
    assert_eq!(get_property(&document, ".one..two.", ".").unwrap(), json!(2));
}

#[test]
fn root_path_reads_whole_document() {
    let document = doc(json!({"a": 1, "b": [true, null]}));
    assert_eq!(
        get_property(&document, ".", ".").unwrap(),
        json!({"a": 1, "b": [true, null]})
    );
    // Empty path behaves as the separator
    assert_eq!(
        get_property(&document, "", ".").unwrap(),
        json!({"a": 1, "b": [true, null]})
    );
}

#[test]
fn root_delete_clears_in_place() {
    let mut document = doc(json!({"a": 1, "b": 2}));
    delete_property(&mut document, ".", ".").unwrap();
    assert!(document.is_empty());
    assert_eq!(get_property(&document, ".", ".").unwrap(), json!({}));
}

#[test]
fn root_create_reports_already_exists() {
    let mut document = doc(json!({"a": 1}));
    assert_eq!(
        add_property(&mut document, ".", ".", json!("x")).unwrap_err(),
        PropError::AlreadyExists(".".to_string())
    );
}

#[test]
fn separator_run_path_is_not_addressable() {
    let mut document = doc(json!({"a": 1}));
    assert_eq!(
        get_property(&document, "..", ".").unwrap_err(),
        PropError::PropertyNotExist("..".to_string())
    );
    // The write ops treat it as addressing nothing at all
    let before = document.clone();
    add_property(&mut document, "..", ".", json!("x")).unwrap();
    update_property(&mut document, "..", ".", json!("x")).unwrap();
    assert_eq!(document, before);
}

#[test]
fn get_below_leaf_wraps_in_single_entry_mapping() {
    let document = doc(json!({"one": {"count": 7}}));
    assert_eq!(
        get_property(&document, "one.count.deeper.still", ".").unwrap(),
        json!({"count": 7})
    );
}

#[test]
fn get_below_leaf_element_wraps_under_property_name() {
    let document = doc(json!({"one": {"three": [1, 2, 3]}}));
    assert_eq!(
        get_property(&document, "one.three[1].x", ".").unwrap(),
        json!({"three": 2})
    );
}

#[test]
fn update_below_leaf_element_writes_literal_key() {
    let mut document = doc(json!({"one": {"three": [1, 2, 3]}}));
    update_property(&mut document, "one.three[0].x", ".", json!("v")).unwrap();
    assert_eq!(
        Value::Object(document),
        json!({"one": {"three": [1, 2, 3], "three[0].x": "v"}})
    );
}

#[test]
fn create_beyond_length_drops_value() {
    let mut document = doc(json!({"one": {"three": [1, 2, 3]}}));
    add_property(&mut document, "one.three[9]", ".", json!("x")).unwrap();
    assert_eq!(Value::Object(document), json!({"one": {"three": [1, 2, 3]}}));
}

#[test]
fn null_is_a_readable_leaf_but_blocks_descent() {
    let mut document = doc(json!({"one": {"gap": null}}));
    assert_eq!(get_property(&document, "one.gap", ".").unwrap(), json!(null));
    assert_eq!(
        get_property(&document, "one.gap.below", ".").unwrap_err(),
        PropError::PropertyNotExist("gap.below".to_string())
    );
    // Null at the final segment replaces like any other leaf
    update_property(&mut document, "one.gap", ".", json!("filled")).unwrap();
    assert_eq!(Value::Object(document), json!({"one": {"gap": "filled"}}));
}

#[test]
fn invalid_index_token_propagates_through_every_op() {
    let mut document = doc(json!({"one": [1, 2]}));
    let before = document.clone();
    let expected = PropError::InvalidIndex {
        property: "one".to_string(),
        token: "99999999999999999999999".to_string(),
    };
    let path = "one[99999999999999999999999]";
    assert_eq!(get_property(&document, path, ".").unwrap_err(), expected);
    assert_eq!(
        add_property(&mut document, path, ".", json!(0)).unwrap_err(),
        expected
    );
    assert_eq!(
        update_property(&mut document, path, ".", json!(0)).unwrap_err(),
        expected
    );
    assert_eq!(delete_property(&mut document, path, ".").unwrap_err(), expected);
    assert_eq!(document, before);
}

#[test]
fn malformed_index_suffix_is_a_plain_key() {
    let mut document = doc(json!({"one": [1, 2]}));
    // "one[x]" is not an indexed segment; it addresses a literal key
    assert_eq!(
        get_property(&document, "one[x]", ".").unwrap_err(),
        PropError::PropertyNotExist("one[x]".to_string())
    );
    add_property(&mut document, "one[x]", ".", json!("v")).unwrap();
    assert_eq!(
        Value::Object(document),
        json!({"one": [1, 2], "one[x]": "v"})
    );
}

#[test]
fn sequence_order_survives_mixed_mutations() {
    let mut document = doc(json!({"list": [0, 1, 2, 3, 4]}));
    delete_property(&mut document, "list[1]", ".").unwrap();
    assert_eq!(
        get_property(&document, "list", ".").unwrap(),
        json!([0, 2, 3, 4])
    );
    update_property(&mut document, "list[2]", ".", json!("three")).unwrap();
    assert_eq!(
        get_property(&document, "list", ".").unwrap(),
        json!([0, 2, "three", 4])
    );
    update_property(&mut document, "list[4]", ".", json!("tail")).unwrap();
    assert_eq!(
        get_property(&document, "list", ".").unwrap(),
        json!([0, 2, "three", 4, "tail"])
    );
}

#[test]
fn hyphenated_property_names_resolve() {
    let mut document = doc(json!({"load-balancers": [{"dns_name": "a"}, {"dns_name": "b"}]}));
    assert_eq!(
        get_property(&document, "load-balancers[1].dns_name", ".").unwrap(),
        json!("b")
    );
    update_property(&mut document, "load-balancers[1].dns_name", ".", json!("c")).unwrap();
    assert!(exists(&document, "load-balancers[1]", "."));
    assert_eq!(
        get_property(&document, "load-balancers[1].dns_name", ".").unwrap(),
        json!("c")
    );
}

#[test]
fn failed_deep_write_leaves_document_untouched() {
    let mut document = doc(json!({
        "one": {"two": {"three": [1, 2, 3]}},
    }));
    let before = document.clone();
    assert!(add_property(&mut document, "one.missing.key", ".", json!(1)).is_err());
    assert!(update_property(&mut document, "one.two.three[9].x", ".", json!(1)).is_err());
    assert!(delete_property(&mut document, "one.two.three[9]", ".").is_err());
    assert_eq!(document, before);
}
