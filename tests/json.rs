#![cfg(feature = "serde")]

use inclause::prelude::*;
use serde_json::json;

#[test]
fn test_json_array_parameter() {
    let mut query = QueryBuffer::default().with_parameter("ids", json!([1, null, 2.5, "x"]));
    let count = InClause::IN
        .apply(&ClauseTokens::new(["IN", "id", "ids"]), &mut query)
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(query.sql(), "id IS NULL OR id IN (?, ?, ?)");
    assert_eq!(
        query.params(),
        &[Value::Integer(1), Value::Real(2.5), Value::from("x")]
    );
}

#[test]
fn test_json_null_and_object() {
    let request = ClauseRequest::new("id", "ids").unwrap();

    let null = ParameterValue::from(json!(null));
    assert_eq!(InClause::IN.render(&request, Some(&null)).unwrap().text, "0 = 0");

    let object = ParameterValue::from(json!({ "a": 1 }));
    let err = InClause::IN.render(&request, Some(&object)).unwrap_err();
    assert!(matches!(
        err,
        ClauseError::UnsupportedParameterType { type_name: "map", .. }
    ));
}

#[test]
fn test_kind_and_dialect_deserialize() {
    let kind: InClauseKind = serde_json::from_str("\"NOTIN\"").unwrap();
    assert_eq!(kind, InClauseKind::NotIn);

    let dialect: Dialect = serde_json::from_str("\"postgresql\"").unwrap();
    assert_eq!(dialect, Dialect::PostgreSQL);
}
