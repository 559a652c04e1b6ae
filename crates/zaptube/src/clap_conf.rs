//! Module for Clap related structs (derived)

#![deny(missing_docs)] // comments are used for "--help" generation, so it should always be defined

use clap::{
	ArgAction,
	Parser,
	Subcommand,
};
use is_terminal::IsTerminal;
use libzaptube::data::quality::Quality;
use std::path::PathBuf;

/// Trait to check and transform all Command Structures
trait Check {
	/// Check and transform self to be correct
	fn check(&mut self) -> Result<(), crate::Error>;
}

#[derive(Debug, Parser, Clone, PartialEq)]
#[command(author, version = env!("ZAPTUBE_VERSION"), about, long_about = None)]
#[command(bin_name("zaptube"))]
#[command(disable_help_subcommand(true))] // Disable subcommand "help", only "-h --help" should be used
#[command(subcommand_negates_reqs(true))]
pub struct CliDerive {
	/// URL of the video or playlist to process
	#[arg(required = true)]
	pub url:          Option<String>,
	/// Output directory for all downloaded files, created if missing
	#[arg(short, long, default_value = "downloads", env = "ZAPTUBE_OUT")]
	pub output:       PathBuf,
	/// Desired video quality (best, worst, 4k, 1080p, 720p, 480p, 360p)
	#[arg(short, long, default_value = "best", value_parser = parse_quality)]
	pub quality:      Quality,
	/// Download only the audio, transcoded to mp3 at 192 kbps
	#[arg(short, long = "audio-only")]
	pub audio_only:   bool,
	/// Treat the URL as a playlist
	#[arg(short, long)]
	pub playlist:     bool,
	/// Print metadata and exit without downloading
	#[arg(short, long = "info-only")]
	pub info_only:    bool,
	/// Maximal amount of playlist entries to process
	#[arg(short, long = "max-videos")]
	pub max_videos:   Option<u32>,
	/// Set Loggin verbosity (0 - Default - WARN, 1 - INFO, 2 - DEBUG, 3 - TRACE)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbosity:    u8,
	/// Explicitly set interactive / not interactive
	#[arg(long = "tty")]
	pub explicit_tty: Option<bool>,
	/// Force Color to be active in any mode
	#[arg(long = "color")]
	pub force_color:  bool,

	/// Subcommands that replace the flag-driven URL modes
	#[command(subcommand)]
	pub subcommands: Option<SubCommands>,
}

impl CliDerive {
	/// Execute clap::Parser::parse and apply custom validation and transformation logic
	#[must_use]
	pub fn custom_parse() -> Self {
		let mut parsed = Self::parse();

		Check::check(&mut parsed).expect("Expected the check to not fail");

		return parsed;
	}

	/// Get if the mode is interactive or not
	#[must_use]
	pub fn is_interactive(&self) -> bool {
		if let Some(explicit_tty) = self.explicit_tty {
			return explicit_tty;
		}

		return std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
	}

	/// Get if the colors are enabled or not
	#[must_use]
	pub fn enable_colors(&self) -> bool {
		return self.force_color | self.is_interactive();
	}
}

impl Check for CliDerive {
	fn check(&mut self) -> Result<(), crate::Error> {
		if self.max_videos.is_some() && !self.playlist && self.subcommands.is_none() {
			warn!("\"--max-videos\" only has a effect together with \"--playlist\"");
		}

		if self.info_only && self.playlist {
			warn!("\"--info-only\" takes precedence over \"--playlist\"");
		}

		if let Some(subcommands) = &mut self.subcommands {
			return Check::check(subcommands);
		}

		return Ok(());
	}
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum SubCommands {
	/// Ask for a URL on the terminal, show its metadata and download after confirmation
	Interactive(CommandInteractive),
	/// Generate shell completions
	Completions(CommandCompletions),
}

impl Check for SubCommands {
	fn check(&mut self) -> Result<(), crate::Error> {
		match self {
			SubCommands::Interactive(v) => return Check::check(v),
			SubCommands::Completions(v) => return Check::check(v),
		}
	}
}

/// Interactively ask for a URL and download it with the default quality settings
#[derive(Debug, Parser, Clone, PartialEq)]
pub struct CommandInteractive {}

impl Check for CommandInteractive {
	fn check(&mut self) -> Result<(), crate::Error> {
		return Ok(());
	}
}

/// Generate shell completions
#[derive(Debug, Parser, Clone, PartialEq)]
pub struct CommandCompletions {
	/// Shell to generate completions for
	#[arg(value_enum)]
	pub shell:            clap_complete::Shell,
	/// Output file path, by default completions are written to STDOUT
	#[arg(short = 'o', long = "out")]
	pub output_file_path: Option<PathBuf>,
}

impl Check for CommandCompletions {
	fn check(&mut self) -> Result<(), crate::Error> {
		return Ok(());
	}
}

/// Parse a quality keyword, rejecting anything outside the known set
/// The library itself would silently fall back to "best", the CLI boundary is strict instead
fn parse_quality(input: &str) -> Result<Quality, String> {
	return Quality::from_keyword_strict(input).ok_or_else(|| {
		return format!("valid values are: {}", Quality::KEYWORDS.join(", "));
	});
}

#[cfg(test)]
mod test {
	use super::*;

	/// Helper to get a [`CliDerive`] with default-ish values for tests
	fn base_cli() -> CliDerive {
		return CliDerive {
			url:          Some("https://example.com/v1".to_owned()),
			output:       PathBuf::from("downloads"),
			quality:      Quality::Best,
			audio_only:   false,
			playlist:     false,
			info_only:    false,
			max_videos:   None,
			verbosity:    0,
			explicit_tty: None,
			force_color:  false,
			subcommands:  None,
		};
	}

	mod cli_derive {
		use super::*;

		#[test]
		fn test_check() {
			let init_default = base_cli();

			let mut cloned = init_default.clone();
			assert!(cloned.check().is_ok());
			assert_eq!(init_default, cloned);
		}

		#[test]
		fn test_is_interactive_explicit() {
			let mut explicit_disable = base_cli();
			explicit_disable.explicit_tty = Some(false);

			assert_eq!(false, explicit_disable.is_interactive());

			let mut explicit_enable = base_cli();
			explicit_enable.explicit_tty = Some(true);

			assert_eq!(true, explicit_enable.is_interactive());
		}

		#[test]
		fn test_enable_colors_forced() {
			let mut forced = base_cli();
			forced.explicit_tty = Some(false);
			forced.force_color = true;

			assert_eq!(true, forced.enable_colors());

			let mut not_forced = base_cli();
			not_forced.explicit_tty = Some(false);

			assert_eq!(false, not_forced.enable_colors());
		}
	}

	mod subcommands {
		use super::*;

		#[test]
		fn test_check() {
			{
				let init_default = SubCommands::Interactive(CommandInteractive {});

				let mut cloned = init_default.clone();
				assert!(cloned.check().is_ok());
				assert_eq!(init_default, cloned);
			}

			{
				let init_default = SubCommands::Completions(CommandCompletions {
					shell:            clap_complete::Shell::Bash,
					output_file_path: None,
				});

				let mut cloned = init_default.clone();
				assert!(cloned.check().is_ok());
				assert_eq!(init_default, cloned);
			}
		}
	}

	mod quality_parsing {
		use super::*;

		#[test]
		fn test_parse_quality_valid() {
			assert_eq!(Ok(Quality::Best), parse_quality("best"));
			assert_eq!(Ok(Quality::FourK), parse_quality("4k"));
			assert_eq!(Ok(Quality::P360), parse_quality("360p"));
		}

		#[test]
		fn test_parse_quality_invalid_is_rejected() {
			assert!(parse_quality("1440p").is_err());
			assert!(parse_quality("").is_err());
			assert!(parse_quality("BEST").is_err());
		}
	}
}
