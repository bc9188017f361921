//! Command-line argument parsing
//!
//! `webshot [output_path] [quality] [-l]`

use anyhow::bail;
use std::path::PathBuf;

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    /// Output file path (default: timestamp-derived name)
    pub output: Option<PathBuf>,
    /// Quality 0-100 (default: 80); range-checked by the encoder config
    pub quality: Option<i64>,
    /// Lossless mode
    pub lossless: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name).
    ///
    /// `-l` is matched case-insensitively at any position and is never
    /// consumed as a positional. Surplus positionals are ignored.
    pub fn parse<I>(args: I) -> anyhow::Result<CliArgs>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut positionals: Vec<String> = Vec::new();

        for arg in args {
            if arg.eq_ignore_ascii_case("-l") {
                parsed.lossless = true;
            } else {
                positionals.push(arg);
            }
        }

        let mut positionals = positionals.into_iter();
        parsed.output = positionals.next().map(PathBuf::from);

        if let Some(raw) = positionals.next() {
            match raw.parse::<i64>() {
                Ok(quality) => parsed.quality = Some(quality),
                Err(_) => bail!("invalid quality '{}': expected an integer", raw),
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, CliArgs::default());
    }

    #[test]
    fn test_output_and_quality() {
        let args = parse(&["shot.webp", "95"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("shot.webp")));
        assert_eq!(args.quality, Some(95));
        assert!(!args.lossless);
    }

    #[test]
    fn test_lossless_flag_any_position() {
        for argv in [
            &["-l", "shot.webp", "90"][..],
            &["shot.webp", "-l", "90"][..],
            &["shot.webp", "90", "-l"][..],
        ] {
            let args = parse(argv).unwrap();
            assert!(args.lossless, "flag not seen in {:?}", argv);
            assert_eq!(args.output, Some(PathBuf::from("shot.webp")));
            assert_eq!(args.quality, Some(90));
        }
    }

    #[test]
    fn test_lossless_flag_case_insensitive() {
        assert!(parse(&["-L"]).unwrap().lossless);
    }

    #[test]
    fn test_flag_alone_does_not_become_output_path() {
        let args = parse(&["-l"]).unwrap();
        assert!(args.lossless);
        assert_eq!(args.output, None);
    }

    #[test]
    fn test_out_of_range_quality_passes_parsing() {
        // Range checks belong to the encoder config, not the parser
        assert_eq!(parse(&["a.webp", "101"]).unwrap().quality, Some(101));
        assert_eq!(parse(&["a.webp", "-5"]).unwrap().quality, Some(-5));
    }

    #[test]
    fn test_non_numeric_quality_is_an_error() {
        assert!(parse(&["a.webp", "high"]).is_err());
    }
}
