//! Tests for the CLI surface and script round-trips

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use cornerstitch::Result;
    use cornerstitch::io::cli::{Cli, CommandProcessor};

    #[test]
    fn test_arguments_parse_with_defaults() {
        let Ok(cli) = Cli::try_parse_from(["tileplane"]) else {
            unreachable!("bare invocation must parse");
        };
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(cli.drawing.is_none());
        assert!(!cli.ascii);

        let Ok(cli) = Cli::try_parse_from([
            "tileplane",
            "layout.txt",
            "--output",
            "report.txt",
            "--drawing",
            "tiles.txt",
            "--ascii",
        ]) else {
            unreachable!("full invocation must parse");
        };
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("layout.txt")));
        assert!(cli.output.is_some());
        assert!(cli.drawing.is_some());
        assert!(cli.ascii);
    }

    #[test]
    fn test_a_script_round_trips_through_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("layout.txt");
        let output = dir.path().join("report.txt");
        fs::write(&input, "10 10\n1 2 2 4 4\nP 3 3\nP 0 0\n")?;

        let cli = Cli {
            input: Some(input),
            output: Some(output.clone()),
            drawing: None,
            ascii: false,
        };
        CommandProcessor::new(cli).process()?;

        assert_eq!(fs::read_to_string(&output)?, "5\n1 0 4\n2 2\n0 0\n");
        Ok(())
    }

    #[test]
    fn test_the_drawing_dump_is_written_alongside_the_report() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("layout.txt");
        let output = dir.path().join("report.txt");
        let drawing = dir.path().join("tiles.txt");
        fs::write(&input, "4 4\n0 0 0 4 2\n")?;

        let cli = Cli {
            input: Some(input),
            output: Some(output),
            drawing: Some(drawing.clone()),
            ascii: true,
        };
        CommandProcessor::new(cli).process()?;

        let dump = fs::read_to_string(&drawing)?;
        let mut lines = dump.lines();
        assert_eq!(lines.next(), Some("2"));
        assert_eq!(lines.next(), Some("4 4"));
        // Two tile lines, then the four ASCII raster rows.
        assert_eq!(dump.lines().count(), 8);
        assert!(dump.ends_with("0000\n0000\n"));
        Ok(())
    }

    #[test]
    fn test_missing_input_files_are_reported() {
        let cli = Cli {
            input: Some(std::path::PathBuf::from("/nonexistent/layout.txt")),
            output: None,
            drawing: None,
            ascii: false,
        };
        assert!(CommandProcessor::new(cli).process().is_err());
    }
}
