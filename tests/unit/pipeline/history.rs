//! Tests for the undo snapshot stack

#[cfg(test)]
mod tests {
    use lottofilter::draw::Combination;
    use lottofilter::pipeline::{HistoryEntry, HistoryStack, Stage};

    fn combo(values: [u8; 5]) -> Combination {
        Combination::new(values).unwrap()
    }

    // Tests snapshots come back last-in first-out
    // Verified by popping from the front
    #[test]
    fn test_lifo_order() {
        let mut history = HistoryStack::new();
        history.push(Stage::Sum, vec![combo([1, 2, 3, 4, 5]), combo([6, 7, 8, 9, 10])]);
        history.push(Stage::EvenOdd, vec![combo([1, 2, 3, 4, 5])]);
        assert_eq!(history.len(), 2);

        let newest = history.pop().unwrap();
        assert_eq!(newest.stage, Stage::EvenOdd);
        assert_eq!(newest.combinations.len(), 1);

        let oldest = history.pop().unwrap();
        assert_eq!(oldest.stage, Stage::Sum);
        assert!(history.is_empty());
    }

    // Tests popping an empty stack yields nothing
    #[test]
    fn test_pop_empty() {
        let mut history = HistoryStack::default();
        assert!(history.pop().is_none());
        assert!(history.peek().is_none());
    }

    #[test]
    fn test_peek_and_iter() {
        let mut history = HistoryStack::new();
        history.push(Stage::Sum, Vec::new());
        history.push(Stage::EvenOdd, Vec::new());

        assert_eq!(
            history.peek(),
            Some(&HistoryEntry {
                stage: Stage::EvenOdd,
                combinations: Vec::new(),
            })
        );
        let stages: Vec<Stage> = history.iter().map(|entry| entry.stage).collect();
        assert_eq!(stages, vec![Stage::Sum, Stage::EvenOdd]);
        assert_eq!(history.len(), 2);
    }
}
