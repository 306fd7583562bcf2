#[cfg(test)]
mod tests {
    use doc_delta::applier;
    use doc_delta::attributes::Attributes;
    use doc_delta::delta::Delta;
    use doc_delta::entry::DeltaEntry;
    use doc_delta::operation::Operation;
    use doc_delta::types::block_type::BlockType;

    fn text(s: &str) -> DeltaEntry {
        DeltaEntry::new(s)
    }

    // End-to-end scenarios from the worked examples: building a document
    // entirely through `apply()` rather than going through a transaction.

    #[test]
    fn insert_then_insert_at_leaves_three_unmerged_runs() {
        let mut delta = Delta::default();
        applier::apply(&mut delta, vec![Operation::insert_text("Hello World", Attributes::default())]);
        applier::apply(
            &mut delta,
            vec![Operation::retain(5), Operation::insert_text(" Today", Attributes::default())],
        );
        assert_eq!(delta.to_vec(), vec![text("Hello"), text(" Today"), text(" World")]);
    }

    #[test]
    fn replace_at_mid_text_splits_around_the_swap() {
        let mut delta = Delta::new(vec![
            DeltaEntry::new(BlockType::Blockquote),
            DeltaEntry::new(BlockType::Unordered),
            text("ello"),
            DeltaEntry::new(BlockType::Ordered),
        ]);
        applier::apply(&mut delta, vec![Operation::retain(2), Operation::swap_text("blah", None)]);
        assert_eq!(
            delta.to_vec(),
            vec![
                DeltaEntry::new(BlockType::Blockquote),
                DeltaEntry::new(BlockType::Unordered),
                text("blah"),
                text("llo"),
                DeltaEntry::new(BlockType::Ordered),
            ]
        );
    }

    #[test]
    fn delete_past_end_of_document_commits_with_no_visible_mutation() {
        let mut delta = Delta::new(vec![text("Hi")]);
        let before = delta.clone();
        applier::apply(&mut delta, vec![Operation::retain(2), Operation::delete(50)]);
        assert_eq!(delta, before);
    }

    #[test]
    fn net_length_equals_inserts_minus_deletes_swap_is_neutral() {
        let mut delta = Delta::new(vec![text("Hello World")]);
        let pre = delta.length();
        applier::apply(
            &mut delta,
            vec![
                Operation::retain(6),
                Operation::swap_text("w", None),
                Operation::retain(4),
                Operation::insert_text("!", Attributes::default()),
                Operation::delete(1),
            ],
        );
        // swap replaces one unit with one unit (net 0), +1 insert, -1 delete => net 0
        assert_eq!(delta.length(), pre);
    }

    #[test]
    fn idempotence_of_empty_operation_list() {
        let mut delta = Delta::new(vec![text("Hello"), DeltaEntry::new(BlockType::Paragraph)]);
        let before = delta.clone();
        applier::apply(&mut delta, vec![]);
        assert_eq!(delta, before);
    }
}
