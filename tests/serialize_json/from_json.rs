#[cfg(test)]
mod tests {
    use doc_delta::delta::Delta;
    use doc_delta::entry::DeltaEntry;
    use doc_delta::operation::Operation;
    use doc_delta::payload::DeltaPayload;
    use doc_delta::types::block_type::BlockType;

    #[test]
    fn a_bare_string_insert_deserializes_to_a_text_payload() {
        let entry: DeltaEntry = serde_json::from_str(r#"{"insert": "Hello"}"#).unwrap();
        assert_eq!(entry.payload, DeltaPayload::Text("Hello".to_string()));
        assert!(entry.attributes.is_empty());
    }

    #[test]
    fn a_nested_block_insert_deserializes_to_a_block_payload() {
        let entry: DeltaEntry = serde_json::from_str(r#"{"insert": {"block": "unordered-list"}}"#).unwrap();
        assert_eq!(entry.payload, DeltaPayload::Block(BlockType::UnorderedList));
    }

    #[test]
    fn entry_attributes_round_trip() {
        let entry: DeltaEntry =
            serde_json::from_str(r#"{"insert": "Hello", "attributes": {"bold": true, "color": "red"}}"#).unwrap();
        assert_eq!(entry.attributes.bold(), Some(true));
        assert_eq!(entry.attributes.color(), Some("red"));
    }

    #[test]
    fn delta_deserializes_from_an_ops_array() {
        let delta: Delta =
            serde_json::from_str(r#"{"ops": [{"insert": {"block": "paragraph"}}, {"insert": "Hello"}]}"#).unwrap();
        assert_eq!(delta.length(), 6);
        assert_eq!(delta.entry_at(0).unwrap().0.payload, DeltaPayload::Block(BlockType::Paragraph));
    }

    #[test]
    fn insert_operation_deserializes_from_a_flat_insert_key() {
        let op: Operation = serde_json::from_str(r#"{"insert": "abc"}"#).unwrap();
        assert_eq!(op, Operation::insert_text("abc", Default::default()));
    }

    #[test]
    fn retain_operation_deserializes_without_attributes() {
        let op: Operation = serde_json::from_str(r#"{"retain": 4}"#).unwrap();
        assert_eq!(op, Operation::retain(4));
    }

    #[test]
    fn delete_operation_deserializes_from_a_flat_delete_key() {
        let op: Operation = serde_json::from_str(r#"{"delete": 5}"#).unwrap();
        assert_eq!(op, Operation::delete(5));
    }

    #[test]
    fn swap_operation_deserializes_from_a_flat_swap_key() {
        let op: Operation = serde_json::from_str(r#"{"swap": {"block": "ordered"}}"#).unwrap();
        assert_eq!(op, Operation::swap_block(BlockType::Ordered, None));
    }

    #[test]
    fn unknown_attribute_keys_pass_through_without_error() {
        let entry: DeltaEntry =
            serde_json::from_str(r#"{"insert": "x", "attributes": {"customFlag": true}}"#).unwrap();
        assert_eq!(entry.attributes.get("customFlag"), Some(&doc_delta::types::attr_val::AttrVal::Bool(true)));
    }
}
