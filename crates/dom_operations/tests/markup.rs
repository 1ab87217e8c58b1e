//! Tests for attribute markup synthesis.
//!
//! This suite validates the strings produced for server-rendered markup:
//! presence-only booleans, omitted values, aliasing, escaping, custom and SVG
//! attributes, and the id/root markers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests fail loudly")]

mod common;

use std::sync::Arc;

use common::{operations_over, standard_operations};
use dom_operations::{AttributeNameCache, Diagnostic, PropValue};
use dom_property::DomPropertyRegistry;
use dom_property::html::html_config;

#[test]
fn boolean_properties_are_presence_only() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("disabled", &PropValue::Boolean(true)),
        Some(String::from("disabled=\"\""))
    );
    assert_eq!(
        operations.create_markup_for_property("disabled", &PropValue::Boolean(false)),
        Some(String::new())
    );
    // Truthy non-booleans still render as presence-only.
    assert_eq!(
        operations.create_markup_for_property("checked", &PropValue::from("yes")),
        Some(String::from("checked=\"\""))
    );
}

#[test]
fn overloaded_booleans_keep_string_values() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("download", &PropValue::Boolean(true)),
        Some(String::from("download=\"\""))
    );
    assert_eq!(
        operations.create_markup_for_property("download", &PropValue::from("custom")),
        Some(String::from("download=\"custom\""))
    );
    assert_eq!(
        operations.create_markup_for_property("download", &PropValue::Boolean(false)),
        Some(String::new())
    );
}

#[test]
fn numeric_properties_drop_out_of_range_values() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("cols", &PropValue::Number(0.0)),
        Some(String::new())
    );
    assert_eq!(
        operations.create_markup_for_property("cols", &PropValue::Number(5.0)),
        Some(String::from("cols=\"5\""))
    );
    assert_eq!(
        operations.create_markup_for_property("start", &PropValue::from("abc")),
        Some(String::new())
    );
    assert_eq!(
        operations.create_markup_for_property("start", &PropValue::Number(-2.0)),
        Some(String::from("start=\"-2\""))
    );
}

#[test]
fn aliased_names_and_escaped_values() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("className", &PropValue::from("a b")),
        Some(String::from("class=\"a b\""))
    );
    assert_eq!(
        operations.create_markup_for_property("htmlFor", &PropValue::from("field")),
        Some(String::from("for=\"field\""))
    );
    assert_eq!(
        operations.create_markup_for_property("title", &PropValue::from("\"><script>")),
        Some(String::from("title=\"&quot;&gt;&lt;script&gt;\""))
    );
    assert_eq!(
        operations.create_markup_for_property("tabIndex", &PropValue::Number(-1.0)),
        Some(String::from("tabindex=\"-1\""))
    );
    assert_eq!(
        operations.create_markup_for_property("title", &PropValue::Null),
        Some(String::new())
    );
}

#[test]
fn custom_attributes_through_property_markup() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("data-x", &PropValue::from("1")),
        Some(String::from("data-x=\"1\""))
    );
    assert_eq!(
        operations.create_markup_for_property("aria-hidden", &PropValue::Boolean(true)),
        Some(String::from("aria-hidden=\"true\""))
    );
    assert_eq!(
        operations.create_markup_for_property("data-x", &PropValue::Undefined),
        Some(String::new())
    );
}

#[test]
fn unknown_names_produce_no_markup() {
    let (operations, diagnostics) = standard_operations();
    assert_eq!(
        operations.create_markup_for_property("onClick", &PropValue::from("x")),
        None
    );
    assert_eq!(
        operations.create_markup_for_property("classname", &PropValue::from("x")),
        None
    );
    assert_eq!(
        operations.create_markup_for_property("classname", &PropValue::from("y")),
        None
    );
    assert_eq!(
        diagnostics.reports(),
        vec![Diagnostic::UnknownProperty {
            name: String::from("classname"),
            suggestion: String::from("className"),
        }]
    );
}

#[test]
fn custom_attribute_markup_validates_names() {
    let (operations, diagnostics) = standard_operations();
    assert_eq!(
        operations.create_markup_for_custom_attribute("data-x", &PropValue::from("1")),
        "data-x=\"1\""
    );
    assert_eq!(
        operations.create_markup_for_custom_attribute("my-widget", &PropValue::Number(2.5)),
        "my-widget=\"2.5\""
    );
    assert_eq!(operations.create_markup_for_custom_attribute("1bad", &PropValue::from("1")), "");
    assert_eq!(operations.create_markup_for_custom_attribute("data-x", &PropValue::Null), "");
    assert_eq!(
        diagnostics.reports(),
        vec![Diagnostic::InvalidAttributeName {
            name: String::from("1bad"),
        }]
    );
}

#[test]
fn svg_markup_normalizes_aliases_without_coercion() {
    let (operations, _) = standard_operations();
    assert_eq!(
        operations.create_markup_for_svg_attribute("strokeWidth", &PropValue::Number(2.0)),
        "stroke-width=\"2\""
    );
    assert_eq!(
        operations.create_markup_for_svg_attribute("xlinkHref", &PropValue::from("#shape")),
        "xlink:href=\"#shape\""
    );
    assert_eq!(
        operations.create_markup_for_svg_attribute("fooBar", &PropValue::from("x")),
        "fooBar=\"x\""
    );
    // A boolean-kind descriptor still emits the raw value.
    assert_eq!(
        operations.create_markup_for_svg_attribute("hidden", &PropValue::Boolean(false)),
        "hidden=\"false\""
    );
    assert_eq!(operations.create_markup_for_svg_attribute("1x", &PropValue::from("x")), "");
    assert_eq!(operations.create_markup_for_svg_attribute("fill", &PropValue::Null), "");
}

#[test]
fn id_and_root_markers() {
    let (operations, _) = standard_operations();
    assert_eq!(operations.create_markup_for_id(".0.1"), "data-node-id=\".0.1\"");
    assert_eq!(operations.create_markup_for_id("a\"b"), "data-node-id=\"a&quot;b\"");
    assert_eq!(operations.create_markup_for_root(), "data-node-root=\"\"");
}

#[test]
fn marker_names_follow_the_registry() {
    let registry = DomPropertyRegistry::builder()
        .marker_attributes("data-key", "data-hydrate")
        .inject(html_config())
        .unwrap()
        .build();
    let (operations, _) = operations_over(registry, Arc::new(AttributeNameCache::new()));
    assert_eq!(operations.create_markup_for_id("7"), "data-key=\"7\"");
    assert_eq!(operations.create_markup_for_root(), "data-hydrate=\"\"");
}
