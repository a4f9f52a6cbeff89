//! Tests for the step labels and progress bar position

#[cfg(test)]
mod tests {
    use lottofilter::draw::{Combination, Game};
    use lottofilter::io::progress::{StepProgress, matches_label, step_label};
    use lottofilter::pipeline::{PipelineState, Stage};

    // Tests labels are one-based and capped at the last step
    // Verified by removing the cap
    #[test]
    fn test_step_label() {
        assert_eq!(step_label(Stage::Count), "STEP 1 / 7");
        assert_eq!(step_label(Stage::Sum), "STEP 2 / 7");
        assert_eq!(step_label(Stage::Tail), "STEP 7 / 7");
        assert_eq!(step_label(Stage::Result), "STEP 7 / 7");
    }

    #[test]
    fn test_matches_label() {
        assert_eq!(matches_label(0), "0 MATCHES");
        assert_eq!(matches_label(42), "42 MATCHES");
    }

    // Tests the bar tracks the pipeline stage
    #[test]
    fn test_update_tracks_stage() {
        let progress = StepProgress::hidden();
        let state = PipelineState::new(
            Game::Powerball,
            vec![Combination::new([1, 2, 3, 4, 5]).unwrap()],
        );
        progress.update(&state);
        assert_eq!(progress.position(), 2);

        let state = state.skip().unwrap().skip().unwrap();
        progress.update(&state);
        assert_eq!(progress.position(), 4);
        progress.finish();
    }
}
