use std::collections::HashMap;

use crate::query::builder::Query;
use crate::query::entry::QueryEntry;
use crate::query::options::*;
use crate::query::types::{Connective, Operator, Value};

#[test]
fn scalar_options_keep_last_value() {
    let query = Query::empty().with([
        with_id("prod_1"),
        with_id("prod_2"),
        with_active(true),
        with_active(false),
        with_created(1),
        with_created(1700000000),
        with_currency("usd"),
        with_currency("eur"),
    ]);

    assert_eq!(query.id(), Some("prod_2"));
    assert_eq!(query.active(), Some(false));
    assert_eq!(query.created(), Some(1700000000));
    assert_eq!(query.currency(), Some("eur"));
}

#[test]
fn metadata_map_merges_with_existing_keys() {
    let query = Query::empty().with([
        with_metadata("a", "0"),
        with_metadata("keep", "yes"),
        with_metadata_map(HashMap::from([("a", "1"), ("b", "2")])),
    ]);

    let metadata = query.metadata();
    assert_eq!(metadata.len(), 3);
    assert_eq!(metadata.get("a").map(String::as_str), Some("1"));
    assert_eq!(metadata.get("b").map(String::as_str), Some("2"));
    assert_eq!(metadata.get("keep").map(String::as_str), Some("yes"));
}

#[test]
fn custom_values_overwrite_per_key() {
    let query = Query::empty().with([
        with_custom("livemode", true),
        with_custom("url", "a"),
        with_custom("livemode", false),
    ]);

    assert_eq!(query.custom().get("livemode"), Some(&Value::Bool(false)));
    assert_eq!(query.custom().get("url"), Some(&Value::from("a")));
}

#[test]
fn raw_options_append_in_call_order() {
    let query = Query::empty().with([
        with_raw_string("x:'1'"),
        with_entry("amount", Operator::GreaterThan, 5),
        with_raw_string("y:'2'"),
        with_is_null("email"),
    ]);

    assert_eq!(query.raw_strings(), ["x:'1'", "y:'2'"]);
    assert_eq!(
        query.entries(),
        [
            QueryEntry::new("amount", Operator::GreaterThan, 5),
            QueryEntry::is_null("email"),
        ]
    );
}

#[test]
fn raw_entry_is_stored_as_given() {
    let entry = QueryEntry::new("name", Operator::Like, "shirt");
    let query = Query::empty().with([with_raw_entry(entry.clone())]);
    assert_eq!(query.entries(), [entry]);
}

#[test]
fn connective_option_switches_join_word() {
    let query = Query::empty().with([with_connective(Connective::Or)]);
    assert_eq!(query.connective(), Connective::Or);
}

#[test]
fn applying_to_template_leaves_template_untouched() {
    let template = Query::empty().with([with_active(true)]);
    let derived = template.with([with_type("service"), with_raw_string("x:'1'")]);

    assert_eq!(template.kind(), None);
    assert!(template.raw_strings().is_empty());
    assert_eq!(derived.kind(), Some("service"));
    assert_eq!(derived.active(), Some(true));
}

#[test]
fn options_round_trip_through_json() {
    let option = with_metadata("order_id", "6735");
    let json = serde_json::to_value(&option).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "option": "metadata",
            "value": { "key": "order_id", "value": "6735" }
        })
    );
    let back: QueryOption = serde_json::from_value(json).unwrap();
    assert_eq!(back, option);
}
