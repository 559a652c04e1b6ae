//! Module for the default single-video mode

use colored::Colorize;
use libzaptube::{
	main::extract_info::extract_info,
	spawn::ytdl::require_ytdl_installed,
};

use crate::{
	clap_conf::CliDerive,
	state::DownloadState,
	utils,
};

/// Amount of description characters printed before the download starts
const DESCRIPTION_SNIPPET_LEN: usize = 100;

/// Handler function for the default single-video mode
/// This function is mainly to keep the code structured and sorted
#[inline]
pub fn command_download(main_args: &CliDerive, url: &str) -> Result<(), crate::Error> {
	let ytdl_version = require_ytdl_installed()?;
	info!("Using youtube-dl version \"{}\"", ytdl_version);

	// fetch metadata first, so that a summary can be printed before the actual download starts
	let metadata = extract_info(url)?;

	println!("{} {}", "Title:".bold(), metadata.title_display());
	println!("{} {} seconds", "Duration:".bold(), metadata.duration_display());
	println!("{} {}", "Uploader:".bold(), metadata.uploader_display());
	println!(
		"{} {}...",
		"Description:".bold(),
		metadata.description_snippet(DESCRIPTION_SNIPPET_LEN)
	);

	println!("\nStarting download...");

	let mut download_state = DownloadState::new_video(
		utils::to_absolute_output(&main_args.output)?,
		main_args.quality,
		main_args.audio_only,
	);
	download_state.set_print_command_log(main_args.verbosity >= 3);
	download_state.set_current_url(url);

	utils::run_download(main_args, &download_state)?;

	println!("Download finished!");

	return Ok(());
}
