//! Module for the playlist mode

use libzaptube::spawn::ytdl::require_ytdl_installed;

use crate::{
	clap_conf::CliDerive,
	state::DownloadState,
	utils,
};

/// Handler function for the playlist mode
/// Playlists are downloaded directly without a metadata pre-fetch
/// This function is mainly to keep the code structured and sorted
#[inline]
pub fn command_playlist(main_args: &CliDerive, url: &str) -> Result<(), crate::Error> {
	let ytdl_version = require_ytdl_installed()?;
	info!("Using youtube-dl version \"{}\"", ytdl_version);

	let mut download_state =
		DownloadState::new_playlist(utils::to_absolute_output(&main_args.output)?, main_args.max_videos);
	download_state.set_print_command_log(main_args.verbosity >= 3);
	download_state.set_current_url(url);

	utils::run_download(main_args, &download_state)?;

	println!("Playlist downloaded successfully!");

	return Ok(());
}
