//! Tests for range parsing, ratio and pair policies, and the stage-tagged filter

#[cfg(test)]
mod tests {
    use lottofilter::LottoError;
    use lottofilter::draw::Combination;
    use lottofilter::filters::predicates::filter_by_tail;
    use lottofilter::filters::{BalanceMode, Bounds, Filter, PairMode};
    use lottofilter::pipeline::Stage;

    // Tests the accepted range spellings
    // Verified by dropping the '..=' separator
    #[test]
    fn test_bounds_parse() {
        assert_eq!("130-220".parse::<Bounds>().unwrap(), Bounds::new(130, 220));
        assert_eq!("130..=220".parse::<Bounds>().unwrap(), Bounds::new(130, 220));
        assert_eq!("130..220".parse::<Bounds>().unwrap(), Bounds::new(130, 220));
        assert_eq!(" 2 - 4 ".parse::<Bounds>().unwrap(), Bounds::new(2, 4));
    }

    // Tests malformed text is an invalid argument
    #[test]
    fn test_bounds_parse_malformed() {
        for text in ["", "130", "130-", "a-b", "-5"] {
            assert!(
                matches!(
                    text.parse::<Bounds>(),
                    Err(LottoError::InvalidArgument {
                        parameter: "range",
                        ..
                    })
                ),
                "expected '{text}' to be rejected"
            );
        }
    }

    // Tests an inverted range is accepted but contains nothing
    #[test]
    fn test_inverted_bounds() {
        let bounds = "9-3".parse::<Bounds>().unwrap();
        assert!(bounds.is_inverted());
        assert!((0..20).all(|v| !bounds.contains(v)));
    }

    #[test]
    fn test_bounds_display() {
        let bounds = Bounds::new(135, 215);
        assert_eq!(bounds.to_string(), "135-215");
        assert_eq!(bounds.to_string().parse::<Bounds>().unwrap(), bounds);
    }

    // Tests which side counts each balance policy accepts
    // Verified by accepting 1 in only-balanced mode
    #[test]
    fn test_balance_mode_accepts() {
        let exclude: Vec<usize> = (0..=5)
            .filter(|&n| BalanceMode::ExcludeSkewed.accepts(n))
            .collect();
        let balanced: Vec<usize> = (0..=5)
            .filter(|&n| BalanceMode::OnlyBalanced.accepts(n))
            .collect();
        assert_eq!(exclude, vec![1, 2, 3, 4]);
        assert_eq!(balanced, vec![2, 3]);
    }

    #[test]
    fn test_pair_mode_accepts() {
        assert!(PairMode::NoPairs.accepts(0));
        assert!(!PairMode::NoPairs.accepts(1));
        assert!(PairMode::AllowOnePair.accepts(1));
        assert!(!PairMode::AllowOnePair.accepts(2));
    }

    // Tests each filter variant maps to its own stage
    #[test]
    fn test_filter_stage() {
        let filters = [
            Filter::Sum(Bounds::new(130, 220)),
            Filter::EvenOdd(BalanceMode::ExcludeSkewed),
            Filter::Magnitude {
                mode: BalanceMode::OnlyBalanced,
                split: 34,
            },
            Filter::Consecutive(PairMode::NoPairs),
            Filter::Zones(Bounds::new(2, 4)),
            Filter::Tail(PairMode::AllowOnePair),
        ];
        let stages: Vec<Stage> = filters.iter().map(Filter::stage).collect();
        assert_eq!(stages, Stage::FILTERS.to_vec());
    }

    // Tests the tagged filter dispatches to the matching predicate
    #[test]
    fn test_filter_apply_matches_predicate() {
        let input = vec![
            Combination::new([3, 7, 17, 27, 37]).unwrap(),
            Combination::new([1, 11, 2, 3, 4]).unwrap(),
            Combination::new([1, 2, 3, 4, 5]).unwrap(),
        ];
        let filter = Filter::Tail(PairMode::AllowOnePair);

        assert_eq!(
            filter.apply(&input),
            filter_by_tail(&input, PairMode::AllowOnePair)
        );
        assert_eq!(filter.apply(&input).len(), 2);
        assert!(!filter.keeps(&input[0]));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(Filter::Sum(Bounds::new(130, 220)).to_string(), "sum 130-220");
        assert_eq!(
            Filter::Tail(PairMode::NoPairs).to_string(),
            "tail none"
        );
    }
}
