#[cfg(test)]
mod tests {
    use doc_delta::attributes::Attributes;
    use doc_delta::document::{Document, FetchedUnit};
    use doc_delta::error::Error;
    use doc_delta::notify::Notifier;
    use doc_delta::operation::Operation;
    use doc_delta::selection::Selection;
    use doc_delta::types::block_type::BlockType;

    // Scenario 5 from the worked examples: an empty document, insert then
    // ensure_block_at_front, selection remaps 0 -> 1.
    #[test]
    fn ensure_block_at_front_bumps_a_zero_selection_to_one() {
        let mut doc = Document::new();
        doc.transact(|tr| {
            tr.insert("Hello World", Attributes::default());
            tr.ensure_block_at_front();
            false
        });
        assert_eq!(doc.delta_at(0).unwrap().payload, doc_delta::payload::DeltaPayload::Block(BlockType::Paragraph));
        assert_eq!(doc.length(), 12);
    }

    // Scenario 6: convertIfNeeded against a collapsed selection at the end
    // of a single block swaps it in place.
    #[test]
    fn convert_if_needed_through_a_transaction_swaps_the_block() {
        let mut doc = Document::new();
        doc.transact(|tr| {
            tr.block(BlockType::Blockquote, Attributes::default());
            false
        });
        doc.selection = Selection::collapsed(1);
        let committed = doc.transact(|tr| {
            let converted = tr.convert_if_needed(BlockType::Unordered);
            assert!(converted);
            false
        });
        assert!(committed);
        assert_eq!(doc.delta_at(0).unwrap().payload, doc_delta::payload::DeltaPayload::Block(BlockType::Unordered));
        assert_eq!(doc.length(), 1);
    }

    #[test]
    fn apply_does_not_touch_selection() {
        let mut doc = Document::new();
        doc.selection = Selection::collapsed(0);
        doc.apply(vec![Operation::insert_text("Hello", Attributes::default())]);
        assert_eq!(doc.length(), 5);
        assert_eq!(doc.selection, Selection::collapsed(0));
    }

    #[test]
    fn transact_updates_typing_attributes_on_format() {
        let mut doc = Document::new();
        doc.transact(|tr| {
            tr.insert("Hello", Attributes::default());
            false
        });
        doc.selection = Selection::new(0, 5);
        doc.transact(|tr| {
            let mut overlay = Attributes::default();
            overlay.insert("bold", true);
            let mut doc_attrs = doc_delta::attributes::Attributes::default();
            tr.format(overlay, &mut doc_attrs);
            false
        });
        assert_eq!(doc.delta_at(0).unwrap().attributes.bold(), Some(true));
    }

    #[test]
    fn transact_async_errors_when_cancelled() {
        let mut doc = Document::new();
        let result = doc.transact_async(|tr| {
            tr.insert("x", Attributes::default());
            true
        });
        assert!(matches!(result, Err(Error::EmptyTransaction)));
        assert_eq!(doc.length(), 0);
    }

    #[test]
    fn transact_async_commits_on_success() {
        let mut doc = Document::new();
        let result = doc.transact_async(|tr| {
            tr.insert("x", Attributes::default());
            false
        });
        assert!(result.is_ok());
        assert_eq!(doc.length(), 1);
    }

    // The `cb` override from spec.md §6: passing a notifier to `transact`
    // suppresses the document's own notifier for that one call.
    #[test]
    fn transact_with_suppresses_the_documents_own_notifier() {
        #[derive(Default)]
        struct Seen(Vec<&'static str>);
        impl Notifier for Seen {
            fn before_transaction(&mut self, _document: &Document, _ops: &[Operation]) {
                self.0.push("before");
            }
            fn after_transaction(&mut self, _document: &Document, _ops: &[Operation]) {
                self.0.push("after");
            }
        }
        let mut doc = Document::new();
        let mut cb = Seen::default();
        let committed = doc.transact_with(
            |tr| {
                tr.insert("Hello", Attributes::default());
                false
            },
            &mut cb,
        );
        assert!(committed);
        assert_eq!(cb.0, vec!["before", "after"]);
        assert_eq!(doc.length(), 5);
    }

    #[test]
    fn transact_simulate_leaves_original_untouched() {
        let mut doc = Document::new();
        doc.transact(|tr| {
            tr.insert("Hello", Attributes::default());
            false
        });
        let simulated = doc.transact_simulate(|tr| {
            tr.insert(" World", Attributes::default());
            false
        });
        assert_eq!(doc.length(), 5);
        assert_eq!(simulated.length(), 11);
    }

    #[test]
    fn fetch_at_distinguishes_block_from_grapheme() {
        let mut doc = Document::new();
        doc.transact(|tr| {
            tr.block(BlockType::Paragraph, Attributes::default());
            tr.insert("hi", Attributes::default());
            false
        });
        assert_eq!(doc.fetch_at(0), Some(FetchedUnit::Block(BlockType::Paragraph)));
        assert_eq!(doc.fetch_at(1), Some(FetchedUnit::Grapheme("h")));
    }
}
