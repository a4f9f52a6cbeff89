//! Tests for the fixed stage order

#[cfg(test)]
mod tests {
    use lottofilter::pipeline::Stage;

    // Tests next walks every stage once, ending after results
    // Verified by skipping the size stage in next
    #[test]
    fn test_next_chain() {
        let mut visited = vec![Stage::Count];
        let mut stage = Stage::Count;
        while let Some(next) = stage.next() {
            visited.push(next);
            stage = next;
        }
        assert_eq!(visited.len(), 8);
        assert_eq!(visited.last(), Some(&Stage::Result));
        for (expected, stage) in visited.iter().enumerate() {
            assert_eq!(stage.index(), expected);
        }
    }

    // Tests the filter list follows stage order and excludes the endpoints
    #[test]
    fn test_filter_stages() {
        assert!(Stage::FILTERS.iter().all(|s| s.is_filter()));
        assert!(Stage::FILTERS.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!Stage::Count.is_filter());
        assert!(!Stage::Result.is_filter());
    }

    #[test]
    fn test_display_and_title() {
        assert_eq!(Stage::EvenOdd.to_string(), "even-odd");
        assert_eq!(Stage::Sum.title(), "Sum Filtering");
    }
}
