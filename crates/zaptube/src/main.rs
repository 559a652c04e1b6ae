#![allow(clippy::needless_return)]
#![warn(clippy::implicit_return)]

#[macro_use]
extern crate log;

use colored::Colorize;
use flexi_logger::LogSpecification;
use std::io::Error as ioError;

mod clap_conf;
use clap_conf::*;

mod commands;
mod logger;
mod state;
mod utils;

pub use libzaptube::Error;

/// Main
fn main() -> Result<(), ioError> {
	let mut logger_handle = logger::setup_logger()?;

	let cli_matches = CliDerive::custom_parse();

	log::info!("CLI Verbosity is {}", cli_matches.verbosity);

	// apply cli "verbosity" argument to the log level
	logger_handle.set_new_spec(
		match cli_matches.verbosity {
			0 => LogSpecification::parse("warn"),
			1 => LogSpecification::parse("info"),
			2 => LogSpecification::parse("debug"),
			_ => LogSpecification::parse("trace"),
		}
		.expect("Expected LogSpecification to parse correctly"),
	);

	if cli_matches.force_color {
		colored::control::set_override(true);
	}

	let result = match &cli_matches.subcommands {
		Some(SubCommands::Interactive(v)) => commands::interactive::command_interactive(&cli_matches, v),
		Some(SubCommands::Completions(v)) => commands::completions::command_completions(&cli_matches, v),
		None => command_url(&cli_matches),
	};

	// operation-level failures print the description and exit with a non-zero code
	if let Err(err) = result {
		debug!("Error Backtrace:\n{}", err.get_backtrace());
		eprintln!("{} {}", "Extraction failed:".red(), err);
		std::process::exit(1);
	}

	return Ok(());
}

/// Handler function for the flag-driven URL modes
/// Mode precedence is info-only, then playlist, then single video
/// This function is mainly to keep the code structured and sorted
#[inline]
fn command_url(main_args: &CliDerive) -> Result<(), crate::Error> {
	let url = main_args
		.url
		.as_deref()
		.expect("Expected clap to enforce a URL when no subcommand is given");

	if main_args.info_only {
		return commands::info::command_info(main_args, url);
	}

	if main_args.playlist {
		return commands::playlist::command_playlist(main_args, url);
	}

	return commands::download::command_download(main_args, url);
}
