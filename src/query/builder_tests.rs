use std::collections::HashMap;

use crate::query::builder::Query;
use crate::query::defaults::QueryDefaults;
use crate::query::entry::QueryEntry;
use crate::query::options::*;
use crate::query::types::{Connective, Operator};

fn build(options: Vec<QueryOption>) -> String {
    QueryDefaults::default().string_query(options)
}

#[test]
fn empty_query_renders_empty_string() {
    assert_eq!(build(vec![]), "");
    assert!(Query::empty().is_empty());
}

#[test]
fn boolean_fields_render_last_value() {
    for flag in [true, false] {
        let out = build(vec![with_active(!flag), with_active(flag)]);
        assert_eq!(out, format!("active:'{}'", flag));

        let out = build(vec![with_deleted(flag)]);
        assert_eq!(out, format!("deleted:'{}'", flag));

        let out = build(vec![with_shippable(flag)]);
        assert_eq!(out, format!("shippable:'{}'", flag));
    }
}

#[test]
fn clauses_follow_fixed_field_order() {
    let out = build(vec![
        with_entry("amount", Operator::LessThan, 500),
        with_raw_string("url~'shop'"),
        with_custom("livemode", true),
        with_metadata("order_id", "6735"),
        with_price_id("price_1"),
        with_currency("usd"),
        with_type("good"),
        with_description("shirt"),
        with_created(1700000000),
        with_shippable(true),
        with_deleted(false),
        with_active(true),
        with_id("prod_1"),
    ]);

    assert_eq!(
        out,
        "id:'prod_1' AND active:'true' AND deleted:'false' AND shippable:'true' \
         AND created:'1700000000' AND description:'shirt' AND type:'good' \
         AND currency:'usd' AND default_price.id:'price_1' \
         AND metadata['order_id']:'6735' AND livemode:'true' AND url~'shop' \
         AND amount<'500'"
    );
}

#[test]
fn or_connective_joins_with_or() {
    let out = build(vec![
        with_connective(Connective::Or),
        with_currency("usd"),
        with_currency("eur"),
        with_raw_string("currency:'gbp'"),
    ]);
    assert_eq!(out, "currency:'eur' OR currency:'gbp'");
}

#[test]
fn unknown_connective_renders_literally() {
    let out = build(vec![
        with_connective(Connective::Unknown),
        with_id("a"),
        with_active(true),
    ]);
    assert_eq!(out, "id:'a' UNKNOWN active:'true'");
}

#[test]
fn metadata_map_renders_each_pair() {
    let out = build(vec![with_metadata_map(HashMap::from([("a", "1"), ("b", "2")]))]);
    let clauses: Vec<&str> = out.split(" AND ").collect();

    assert_eq!(clauses.len(), 2);
    assert!(clauses.contains(&"metadata['a']:'1'"));
    assert!(clauses.contains(&"metadata['b']:'2'"));
}

#[test]
fn metadata_reassignment_keeps_single_clause() {
    let out = build(vec![
        with_metadata("a", "1"),
        with_metadata("b", "2"),
        with_metadata("a", "3"),
    ]);
    assert_eq!(out, "metadata['a']:'3' AND metadata['b']:'2'");
}

#[test]
fn custom_list_expands_into_clauses() {
    let out = build(vec![with_custom("currency", vec!["usd", "eur"])]);
    assert_eq!(out, "currency:'usd' AND currency:'eur'");
}

#[test]
fn raw_strings_appear_verbatim_in_order() {
    let raws = ["c:'3'", "a>'1'", "-b:'2'"];
    let out = build(raws.iter().map(|r| with_raw_string(*r)).collect());
    assert_eq!(out, raws.join(" AND "));
}

#[test]
fn is_null_matches_explicit_entry() {
    let sugar = build(vec![with_is_null("description")]);
    let explicit = build(vec![with_entry("description", Operator::Equals, "null")]);
    assert_eq!(sugar, explicit);
    assert_eq!(sugar, "description:'null'");
}

#[test]
fn entries_render_with_negation() {
    let out = build(vec![
        with_entry("status", Operator::NotEqual, "closed"),
        with_raw_entry(QueryEntry::new("name", Operator::Like, "foo")),
    ]);
    assert_eq!(out, "-status:'closed' AND name~'foo'");
}

#[test]
fn grouped_wraps_in_parentheses() {
    let query = Query::empty().with([with_active(true), with_id("x")]);
    assert_eq!(query.grouped(), "(id:'x' AND active:'true')");
    assert_eq!(Query::empty().grouped(), "()");
}

#[test]
fn rendering_is_repeatable() {
    let query = Query::empty().with([
        with_metadata("a", "1"),
        with_metadata("b", "2"),
        with_custom("x", 1),
        with_custom("y", 2),
    ]);
    assert_eq!(query.to_string(), query.to_string());
    assert_eq!(query.clauses().len(), 4);
}

#[test]
fn every_scalar_renders_only_last_value() {
    let cases = [
        (with_id("a"), with_id("b"), "id:'b'"),
        (with_active(true), with_active(false), "active:'false'"),
        (with_deleted(false), with_deleted(true), "deleted:'true'"),
        (with_shippable(true), with_shippable(false), "shippable:'false'"),
        (with_created(1), with_created(2), "created:'2'"),
        (with_description("x"), with_description("y"), "description:'y'"),
        (with_type("good"), with_type("service"), "type:'service'"),
        (with_currency("usd"), with_currency("eur"), "currency:'eur'"),
        (
            with_price_id("price_1"),
            with_price_id("price_2"),
            "default_price.id:'price_2'",
        ),
        (with_custom("url", "a"), with_custom("url", "b"), "url:'b'"),
        (with_metadata("k", "1"), with_metadata("k", "2"), "metadata['k']:'2'"),
    ];

    for (first, second, expected) in cases {
        assert_eq!(build(vec![first, second]), expected);
    }
}

#[test]
fn custom_key_of_dedicated_field_overrides_it() {
    assert_eq!(
        build(vec![with_active(true), with_custom("active", false)]),
        "active:'false'"
    );
    assert_eq!(
        build(vec![with_custom("type", "good"), with_type("service")]),
        "type:'service'"
    );
    assert_eq!(
        build(vec![with_id("a"), with_custom("id", "b"), with_currency("usd")]),
        "id:'b' AND currency:'usd'"
    );
    assert_eq!(
        build(vec![with_created(5), with_custom("created", 7)]),
        "created:'7'"
    );
}

#[test]
fn custom_value_of_other_type_replaces_dedicated_field() {
    let query = Query::empty().with([with_active(true), with_custom("active", "maybe")]);
    assert_eq!(query.active(), None);
    assert_eq!(query.to_string(), "active:'maybe'");

    let query = query.with([with_active(false)]);
    assert!(query.custom().is_empty());
    assert_eq!(query.to_string(), "active:'false'");
}
