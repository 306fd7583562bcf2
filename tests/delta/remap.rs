#[cfg(test)]
mod tests {
    use doc_delta::attributes::Attributes;
    use doc_delta::remap::position;
    use doc_delta::operation::Operation;
    use doc_delta::types::block_type::BlockType;

    #[test]
    fn idempotence_of_an_empty_operation_list() {
        assert_eq!(position(4, &[], false), 4);
        assert_eq!(position(0, &[], false), 0);
    }

    #[test]
    fn ensure_block_at_front_nudges_a_zero_result_to_one() {
        let ops = vec![Operation::insert_block(BlockType::Paragraph, Attributes::default())];
        assert_eq!(position(0, &ops, true), 1);
    }

    #[test]
    fn without_the_flag_a_zero_result_stays_zero() {
        let ops = vec![Operation::insert_block(BlockType::Paragraph, Attributes::default())];
        assert_eq!(position(0, &ops, false), 0);
    }

    #[test]
    fn delete_shifts_a_later_position_back_by_the_deleted_length() {
        let ops = vec![Operation::retain(4), Operation::delete(3)];
        assert_eq!(position(10, &ops, false), 7);
    }

    #[test]
    fn insert_shifts_a_position_at_or_after_the_cursor_forward() {
        let ops = vec![Operation::retain(3), Operation::insert_text("xyz", Attributes::default())];
        assert_eq!(position(3, &ops, false), 6);
        assert_eq!(position(10, &ops, false), 13);
    }

    #[test]
    fn a_position_strictly_before_an_insert_is_unaffected() {
        let ops = vec![Operation::retain(5), Operation::insert_text("xyz", Attributes::default())];
        assert_eq!(position(2, &ops, false), 2);
    }

    #[test]
    fn swap_is_treated_as_neutral() {
        let ops = vec![Operation::retain(2), Operation::swap_text("Z", None), Operation::retain(3)];
        assert_eq!(position(2, &ops, false), 2);
        assert_eq!(position(7, &ops, false), 7);
    }

    #[test]
    fn monotonicity_holds_across_a_mixed_operation_list() {
        let ops = vec![
            Operation::retain(2),
            Operation::delete(1),
            Operation::insert_text("abcdef", Attributes::default()),
            Operation::retain(4),
        ];
        let positions: Vec<usize> = (0..20).collect();
        let mapped: Vec<usize> = positions.iter().map(|&p| position(p, &ops, false)).collect();
        for w in mapped.windows(2) {
            assert!(w[0] <= w[1], "remap is not monotonic: {:?}", mapped);
        }
    }
}
