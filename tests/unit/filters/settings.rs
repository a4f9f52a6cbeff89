//! Tests for per-stage filter plans

#[cfg(test)]
mod tests {
    use lottofilter::draw::Game;
    use lottofilter::filters::{BalanceMode, Bounds, Filter, FilterSettings, PairMode};
    use lottofilter::pipeline::Stage;

    // Tests the standard plan for each game
    // Verified by hardcoding the Powerball split
    #[test]
    fn test_for_game_defaults() {
        let settings = FilterSettings::for_game(Game::MegaMillions);
        assert_eq!(
            settings.filter_for(Stage::Sum),
            Some(Filter::Sum(Bounds::new(130, 220)))
        );
        assert_eq!(
            settings.filter_for(Stage::Size),
            Some(Filter::Magnitude {
                mode: BalanceMode::ExcludeSkewed,
                split: 35,
            })
        );
        assert_eq!(
            settings.filter_for(Stage::Zones),
            Some(Filter::Zones(Bounds::new(2, 4)))
        );
        assert_eq!(
            settings.filter_for(Stage::Tail),
            Some(Filter::Tail(PairMode::AllowOnePair))
        );
        assert_eq!(FilterSettings::default(), FilterSettings::for_game(Game::Powerball));
    }

    // Tests every planned filter belongs to the stage it is planned for
    #[test]
    fn test_filters_match_stages() {
        let settings = FilterSettings::default();
        for stage in Stage::FILTERS {
            let filter = settings.filter_for(stage).unwrap();
            assert_eq!(filter.stage(), stage);
        }
        assert_eq!(settings.filter_for(Stage::Count), None);
        assert_eq!(settings.filter_for(Stage::Result), None);
    }

    // Tests set and skip only touch the targeted stage
    // Verified by writing every filter into the sum slot
    #[test]
    fn test_set_and_skip() {
        let mut settings = FilterSettings::skip_all();
        assert!(Stage::FILTERS.iter().all(|&s| settings.filter_for(s).is_none()));

        settings.set(Filter::Consecutive(PairMode::NoPairs));
        assert_eq!(
            settings.filter_for(Stage::Consecutive),
            Some(Filter::Consecutive(PairMode::NoPairs))
        );
        assert_eq!(settings.filter_for(Stage::Sum), None);

        settings.skip(Stage::Consecutive);
        assert_eq!(settings.filter_for(Stage::Consecutive), None);
    }
}
