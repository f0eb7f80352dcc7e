use functor_recipe::framework::Optional;
use functor_recipe::model::{Address, Friend};
use functor_recipe::record::{get, JsonMap, Record};
use serde_json::{json, Value};

fn object(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// A friend with every field and a complete address builds with the address present.
#[test]
fn test_complete_friend_has_present_address() {
    let json = object(json!({
        "firstname": "Jimmy",
        "lastname": "Swifty",
        "phonenumber": "1234567",
        "address": { "city": "Tampere", "street": "Hämeenkatu" }
    }));

    let friend = Friend::from_json(Optional::present(&json));
    assert_eq!(
        friend,
        Optional::present(Friend::new(
            "Jimmy",
            "Swifty",
            "1234567",
            Some(Address::new("Tampere", "Hämeenkatu"))
        ))
    );
}

/// Dropping one required field rejects the whole friend.
#[test]
fn test_missing_lastname_is_absent() {
    let json = object(json!({
        "firstname": "Jimmy",
        "phonenumber": "1234567",
        "address": { "city": "Tampere", "street": "Hämeenkatu" }
    }));

    assert_eq!(Friend::from_json(Optional::present(&json)), Optional::Absent);
}

/// An empty address object leaves the address absent but keeps the friend.
#[test]
fn test_empty_address_does_not_fail_friend() {
    let json = object(json!({
        "firstname": "Timmy",
        "lastname": "Swifty",
        "phonenumber": "7654321",
        "address": {}
    }));

    let friend = Friend::from_json(Optional::present(&json));
    assert!(friend.is_present());
    assert_eq!(friend.flat_map(|f| Optional::from(f.address)), Optional::Absent);
}

/// Absent or non-object input never produces a record.
#[test]
fn test_absent_input_is_absent_record() {
    assert_eq!(Friend::from_json(Optional::Absent), Optional::Absent);
    assert_eq!(Address::from_json(Optional::Absent), Optional::Absent);
    assert!(Friend::from_value(&Value::Null).is_absent());
}

/// A `get` chain stops at the first field with the wrong shape.
#[test]
fn test_lookup_chain_validates_each_field() {
    let json = object(json!({ "city": "Tampere", "street": null }));

    let pair = get::<String>(&json, "city")
        .flat_map(|city| get::<String>(&json, "street").map(|street| (city, street)));
    assert_eq!(pair, Optional::Absent);
}
