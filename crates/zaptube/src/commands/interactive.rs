//! Module for the "interactive" subcommand

use std::io::Write;

use colored::Colorize;
use libzaptube::{
	data::quality::Quality,
	error::IOErrorToError,
	main::extract_info::extract_info,
	spawn::ytdl::require_ytdl_installed,
};

use crate::{
	clap_conf::{
		CliDerive,
		CommandInteractive,
	},
	state::DownloadState,
	utils,
};

/// Handler function for the "interactive" subcommand
/// Asks for a URL, shows its metadata and downloads with the default quality settings after confirmation
/// This function is mainly to keep the code structured and sorted
#[inline]
pub fn command_interactive(main_args: &CliDerive, _sub_args: &CommandInteractive) -> Result<(), crate::Error> {
	let ytdl_version = require_ytdl_installed()?;
	info!("Using youtube-dl version \"{}\"", ytdl_version);

	print!("Enter the video URL: ");
	// ensure the message is printed before reading
	std::io::stdout().flush().attach_location_err("stdout flush")?;

	let mut input = String::new();
	std::io::stdin()
		.read_line(&mut input)
		.attach_location_err("stdin read_line")?;

	let url = input.trim();

	if url.is_empty() {
		println!("No URL given, exiting");
		return Ok(());
	}

	let metadata = extract_info(url)?;

	println!("\n{} {}", "Title:".bold(), metadata.title_display());
	println!("{} {} seconds", "Duration:".bold(), metadata.duration_display());
	println!("{} {}", "Uploader:".bold(), metadata.uploader_display());
	println!();

	let answer = utils::get_input("Download this video?", &["s", "sim", "y", "yes", "N", "no"], "n")?;

	if !is_yes(&answer) {
		println!("Not downloading, exiting");
		return Ok(());
	}

	let mut download_state = DownloadState::new_video(
		utils::to_absolute_output(&main_args.output)?,
		Quality::default(),
		false,
	);
	download_state.set_print_command_log(main_args.verbosity >= 3);
	download_state.set_current_url(url);

	utils::run_download(main_args, &download_state)?;

	println!("Download finished!");

	return Ok(());
}

/// Check if a (already lowercased) answer counts as a "yes"
fn is_yes(answer: &str) -> bool {
	return matches!(answer, "s" | "sim" | "y" | "yes");
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_is_yes() {
		assert!(is_yes("s"));
		assert!(is_yes("sim"));
		assert!(is_yes("y"));
		assert!(is_yes("yes"));

		assert!(!is_yes("n"));
		assert!(!is_yes("no"));
		assert!(!is_yes(""));
		assert!(!is_yes("nope"));
	}
}
