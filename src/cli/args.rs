use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::DEFAULT_OUTPUT;
use crate::model::Language;

#[derive(Parser, Debug)]
#[command(name = "monopoly-cards")]
#[command(
    author,
    version,
    about = "Lay out Monopoly cards on A4 sheets for duplex printing"
)]
pub struct Args {
    /// Output PDF file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Card language (en, es); unknown codes fall back to English
    #[arg(short, long, default_value = "es")]
    pub language: String,

    /// Keep backs in the same slots as fronts (for automatic duplex printers)
    #[arg(long)]
    pub no_mirror: bool,

    /// Include the Chance and Community Chest decks
    #[arg(short = 'a', long)]
    pub include_action_decks: bool,

    /// Hide the "Sheet N - Front/Back" labels
    #[arg(long)]
    pub no_labels: bool,

    /// Hide the cut outlines around each slot
    #[arg(long)]
    pub no_cut_lines: bool,

    /// Skip stream compression of the output
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the requested language
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// Check if back pages should be mirrored
    pub fn mirror_backs(&self) -> bool {
        !self.no_mirror
    }

    /// Check if sheet labels should be shown
    pub fn show_labels(&self) -> bool {
        !self.no_labels
    }

    /// Check if cut outlines should be drawn
    pub fn show_cut_lines(&self) -> bool {
        !self.no_cut_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["monopoly-cards"]);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.language(), Language::Es);
        assert!(args.mirror_backs());
        assert!(!args.include_action_decks);
        assert!(args.show_labels());
        assert!(args.show_cut_lines());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "monopoly-cards",
            "-o",
            "deck.pdf",
            "-l",
            "en",
            "--no-mirror",
            "-a",
            "--no-labels",
            "-vv",
        ]);
        assert_eq!(args.output, PathBuf::from("deck.pdf"));
        assert_eq!(args.language(), Language::En);
        assert!(!args.mirror_backs());
        assert!(args.include_action_decks);
        assert!(!args.show_labels());
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let args = Args::parse_from(["monopoly-cards", "--language", "fr"]);
        assert_eq!(args.language(), Language::En);
    }
}
