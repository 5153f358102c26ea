use super::*;

// =============================================================
// Helpers
// =============================================================

fn parse(raw: &str) -> CapabilitySet {
    serde_json::from_str(raw).expect("valid capability set")
}

// =============================================================
// CapabilitySet decoding
// =============================================================

#[test]
fn decodes_full_entry() {
    let set = parse(
        r#"{"Cloud":{"description":"d","practice_area":"p","industry_verticals":["Retail","Health"],"capacity":10,"consultants":["a@x.com"]}}"#,
    );
    assert_eq!(set.len(), 1);
    let cloud = set.get("Cloud").unwrap();
    assert_eq!(cloud.description, "d");
    assert_eq!(cloud.practice_area, "p");
    assert_eq!(cloud.industry_verticals.as_deref(), Some(&["Retail".to_owned(), "Health".to_owned()][..]));
    assert_eq!(cloud.capacity_or_zero(), 10.0);
    assert_eq!(cloud.consultants, vec!["a@x.com".to_owned()]);
}

#[test]
fn keeps_document_order_of_keys() {
    let set = parse(
        r#"{"Zeta":{"description":"","practice_area":""},"Alpha":{"description":"","practice_area":""},"Mid":{"description":"","practice_area":""}}"#,
    );
    assert_eq!(set.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn optional_fields_default() {
    let set = parse(r#"{"Data":{"description":"d","practice_area":"p"}}"#);
    let data = set.get("Data").unwrap();
    assert!(data.industry_verticals.is_none());
    assert!(data.capacity.is_none());
    assert_eq!(data.capacity_or_zero(), 0.0);
    assert!(data.consultants.is_empty());
}

#[test]
fn null_consultants_and_capacity_default() {
    let set = parse(r#"{"Data":{"description":"d","practice_area":"p","capacity":null,"consultants":null}}"#);
    let data = set.get("Data").unwrap();
    assert_eq!(data.capacity_or_zero(), 0.0);
    assert!(data.consultants.is_empty());
}

#[test]
fn empty_object_is_empty_set() {
    let set = parse("{}");
    assert!(set.is_empty());
}

#[test]
fn non_object_is_rejected() {
    assert!(serde_json::from_str::<CapabilitySet>("[1,2]").is_err());
    assert!(serde_json::from_str::<CapabilitySet>(r#"{"Cloud":"oops"}"#).is_err());
}

#[test]
fn duplicate_key_replaces_in_place() {
    let set = parse(
        r#"{"A":{"description":"first","practice_area":""},"B":{"description":"","practice_area":""},"A":{"description":"second","practice_area":""}}"#,
    );
    assert_eq!(set.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(set.get("A").unwrap().description, "second");
}

// =============================================================
// Mutation bodies
// =============================================================

#[test]
fn mutation_reply_message_is_optional() {
    let with: MutationReply = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert_eq!(with.message.as_deref(), Some("ok"));
    let without: MutationReply = serde_json::from_str("{}").unwrap();
    assert!(without.message.is_none());
}

#[test]
fn error_reply_detail_is_optional() {
    let with: ErrorReply = serde_json::from_str(r#"{"detail":"Student is already signed up"}"#).unwrap();
    assert_eq!(with.detail.as_deref(), Some("Student is already signed up"));
    let without: ErrorReply = serde_json::from_str(r#"{"other":1}"#).unwrap();
    assert!(without.detail.is_none());
}
