//! Module for the State Struct backing the download commands

use std::{
	ffi::{
		OsStr,
		OsString,
	},
	path::PathBuf,
};

use libzaptube::{
	data::quality::{
		PLAYLIST_SELECTOR,
		Quality,
		select_format,
	},
	traits::download_options::DownloadOptions,
};

/// Struct to keep configuration data for the [`DownloadOptions`] trait
///
/// The output directory is carried here explicitly instead of relying on the process CWD
#[derive(Debug, PartialEq, Clone)]
pub struct DownloadState {
	/// The format selector passed to ytdl
	format_selector:         &'static str,
	/// Enable downloading / converting to audio only format
	audio_only_enable:       bool,
	/// Treat the current URL as a playlist
	playlist_enable:         bool,
	/// Stop after this many playlist entries
	playlist_end:            Option<u32>,
	/// Extra arguments to pass to ytdl
	extra_command_arguments: Vec<OsString>,
	/// Print ytdl output as trace logs
	print_command_log:       bool,
	/// The Path to download to
	download_path:           PathBuf,

	/// Set the current URL to be downloaded
	current_url: String,
}

impl DownloadState {
	/// Create a new instance for a single video download
	pub fn new_video(download_path: PathBuf, quality: Quality, audio_only: bool) -> Self {
		return Self {
			format_selector: select_format(quality, audio_only),
			audio_only_enable: audio_only,
			playlist_enable: false,
			playlist_end: None,
			extra_command_arguments: Vec::default(),
			print_command_log: false,
			download_path,

			current_url: String::default(),
		};
	}

	/// Create a new instance for a playlist download
	/// Playlists are fixed to [`PLAYLIST_SELECTOR`] and are never audio-only
	pub fn new_playlist(download_path: PathBuf, max_videos: Option<u32>) -> Self {
		return Self {
			format_selector: PLAYLIST_SELECTOR,
			audio_only_enable: false,
			playlist_enable: true,
			playlist_end: max_videos,
			extra_command_arguments: Vec::default(),
			print_command_log: false,
			download_path,

			current_url: String::default(),
		};
	}

	/// Set the current url to be downloaded
	pub fn set_current_url<S: AsRef<str>>(&mut self, new_url: S) {
		// replace the already allocated string with the "new_url" without creating a new string
		self.current_url.replace_range(.., new_url.as_ref());
	}

	/// Set wheter ytdl output lines should be printed as trace logs
	pub fn set_print_command_log(&mut self, print: bool) {
		self.print_command_log = print;
	}
}

impl DownloadOptions for DownloadState {
	fn get_url(&self) -> &str {
		// check against "current_url" still being empty
		assert!(
			!self.current_url.is_empty(),
			"Expected \"current_url\" to not be empty at this point"
		);

		return &self.current_url;
	}

	fn download_path(&self) -> &std::path::Path {
		return self.download_path.as_path();
	}

	fn format_selector(&self) -> &str {
		return self.format_selector;
	}

	fn audio_only(&self) -> bool {
		return self.audio_only_enable;
	}

	fn playlist(&self) -> bool {
		return self.playlist_enable;
	}

	fn playlist_end(&self) -> Option<u32> {
		return self.playlist_end;
	}

	fn extra_ytdl_arguments(&self) -> Vec<&OsStr> {
		return self
			.extra_command_arguments
			.iter()
			.map(|v| return v.as_os_str())
			.collect();
	}

	fn print_command_log(&self) -> bool {
		return self.print_command_log;
	}
}
