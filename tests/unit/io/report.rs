//! Tests for result listings, summaries and file export

#[cfg(test)]
mod tests {
    use lottofilter::LottoError;
    use lottofilter::draw::{Combination, Game};
    use lottofilter::filters::{Bounds, Filter};
    use lottofilter::io::report::{export_results, write_results, write_summary};
    use lottofilter::pipeline::PipelineState;
    use tempfile::TempDir;

    fn sample_state() -> PipelineState {
        PipelineState::new(
            Game::Powerball,
            vec![
                Combination::new([20, 24, 26, 29, 31]).unwrap(),
                Combination::new([1, 2, 3, 4, 5]).unwrap(),
            ],
        )
        .advance(Filter::Sum(Bounds::new(130, 220)))
        .unwrap()
        .skip()
        .unwrap()
    }

    // Tests results are numbered from one
    // Verified by numbering from zero
    #[test]
    fn test_write_results_numbering() {
        let combinations = vec![
            Combination::new([5, 12, 13, 40, 41]).unwrap(),
            Combination::new([1, 2, 3, 4, 5]).unwrap(),
        ];
        let mut output = Vec::new();
        write_results(&mut output, &combinations).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["P#1  05 12 13 40 41", "P#2  01 02 03 04 05"]);
    }

    #[test]
    fn test_write_results_empty() {
        let mut output = Vec::new();
        write_results(&mut output, &[]).unwrap();
        assert!(String::from_utf8(output).unwrap().starts_with("No matches"));
    }

    // Tests the summary lists each step with before and after counts
    #[test]
    fn test_write_summary() {
        let mut output = Vec::new();
        write_summary(&mut output, &sample_state()).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Powerball: generated 2 combinations"));
        assert!(text.contains("sum 130-220: 2 -> 1"));
        assert!(text.contains("skipped: 1"));
        assert!(text.trim_end().ends_with("1 matches"));
    }

    // Tests export writes the summary followed by the results
    #[test]
    fn test_export_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.txt");

        export_results(&path, &sample_state()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("sum 130-220"));
        assert!(text.contains("P#1  20 24 26 29 31"));
    }

    // Tests an unwritable path reports the path and operation
    #[test]
    fn test_export_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let result = export_results(dir.path(), &sample_state());

        match result {
            Err(LottoError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, dir.path());
                assert_eq!(operation, "create");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
