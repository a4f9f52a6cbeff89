//! Tests for game number ranges

#[cfg(test)]
mod tests {
    use lottofilter::draw::Game;

    // Verified by swapping the two maxima
    #[test]
    fn test_max_numbers() {
        assert_eq!(Game::Powerball.max_number(), 69);
        assert_eq!(Game::MegaMillions.max_number(), 70);
    }

    // Tests the small/big split halves the range
    #[test]
    fn test_small_split() {
        assert_eq!(Game::Powerball.small_split(), 34);
        assert_eq!(Game::MegaMillions.small_split(), 35);
    }

    // Tests both ranges span seven width-10 zones
    // Verified by using floor division
    #[test]
    fn test_zone_count() {
        assert_eq!(Game::Powerball.zone_count(), 7);
        assert_eq!(Game::MegaMillions.zone_count(), 7);
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Game::default(), Game::Powerball);
        assert_eq!(Game::MegaMillions.to_string(), "Mega Millions");
    }
}
