//! Module for various Context traits

use std::{
	ffi::OsStr,
	path::Path,
};

/// Options specific for the [`crate::main::download::download_single`] function
pub trait DownloadOptions {
	/// Get the URL to download
	fn get_url(&self) -> &str;
	/// Get the path to where the Media should be downloaded to
	/// The directory is created when assembling the command if it does not exist yet
	fn download_path(&self) -> &Path;
	/// Get the format selector expression passed to ytdl via "-f"
	/// See [`crate::data::quality::select_format`] for the fixed mapping
	fn format_selector(&self) -> &str;
	/// Get if the download should be reduced to audio-only
	/// Audio-only downloads are extracted to mp3 at 192 kbps
	fn audio_only(&self) -> bool;
	/// Get if the URL should be treated as a playlist
	/// Playlists use a separate output template including playlist title and index
	fn playlist(&self) -> bool;
	/// Get after how many playlist entries ytdl should stop
	/// [`None`] means no limit
	fn playlist_end(&self) -> Option<u32>;
	/// Get Extra Arguments that should be added to the ytdl command
	fn extra_ytdl_arguments(&self) -> Vec<&OsStr>;
	/// Get wheter or not to print out Command STDOUT (in this case ytdl)
	/// With this returning `true`, the output is printed with [`log::trace`]
	fn print_command_log(&self) -> bool;
}
