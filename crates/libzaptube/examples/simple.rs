use std::path::Path;

use libzaptube::{
	data::quality::{
		Quality,
		select_format,
	},
	main::download::{
		DownloadProgress,
		download_single,
	},
	spawn::ytdl::require_ytdl_installed,
	traits::download_options::DownloadOptions,
};

struct Options {
	url: String,
}

impl DownloadOptions for Options {
	fn get_url(&self) -> &str {
		return &self.url;
	}

	fn download_path(&self) -> &std::path::Path {
		return Path::new("/tmp/download");
	}

	fn format_selector(&self) -> &str {
		return select_format(Quality::Best, false);
	}

	fn audio_only(&self) -> bool {
		return false;
	}

	fn playlist(&self) -> bool {
		return false;
	}

	fn playlist_end(&self) -> Option<u32> {
		return None;
	}

	fn extra_ytdl_arguments(&self) -> Vec<&std::ffi::OsStr> {
		return Vec::new();
	}

	fn print_command_log(&self) -> bool {
		return false;
	}
}

fn progress_callback(event: DownloadProgress) {
	match event {
		DownloadProgress::Starting => println!("Starting URL"),
		DownloadProgress::Destination(filename) => println!("Downloading \"{filename}\""),
		DownloadProgress::Progress(percent) => println!("Progress {percent}%"),
		DownloadProgress::Finished => println!("Finished URL"),
	}
}

fn main() -> Result<(), libzaptube::Error> {
	let ytdl_version = require_ytdl_installed()?;

	println!("Using yt-dlp version {ytdl_version}");

	let mut args = std::env::args();

	let _ = args.next();

	let url = args.next().expect("Expected a URL as a argument");

	assert!(!url.is_empty(), "Given URL is empty!");

	let options = Options { url };

	download_single(&options, progress_callback)?;

	println!("Finished downloading");

	return Ok(());
}
