use std::ffi::OsString;

use crate::{
	error::IOErrorToError as _,
	traits::download_options::DownloadOptions,
};

/// Output template for single media downloads, resolved by ytdl
pub const SINGLE_OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";
/// Output template for playlist downloads, resolved by ytdl
pub const PLAYLIST_OUTPUT_TEMPLATE: &str = "%(playlist)s/%(playlist_index)s - %(title)s.%(ext)s";

/// Audio format all audio-only downloads are extracted to
pub const AUDIO_FORMAT: &str = "mp3";
/// Audio bitrate all audio-only downloads are extracted at
pub const AUDIO_QUALITY: &str = "192K";

/// Internal Struct for easily adding various types that resolve to [`OsString`] and output a [`Vec<OsString>`]
/// exists because [std::process::Command] is too overkill to use for a argument collection for having to use [duct] later
#[derive(Debug)]
struct ArgsHelper(Vec<OsString>);
impl ArgsHelper {
	/// Create a new instance of ArgsHelper
	pub fn new() -> Self {
		return Self(Vec::default());
	}

	/// Add a new Argument to the list, added at the end and converted to a [`OsString`]
	/// Returns the input reference to "self" for chaining
	pub fn arg<U>(&mut self, arg: U) -> &mut Self
	where
		U: Into<OsString>,
	{
		self.0.push(arg.into());

		return self;
	}

	/// Convert Self to the inner value
	/// Consumes self
	pub fn into_inner(self) -> Vec<OsString> {
		return self.0;
	}
}

impl From<ArgsHelper> for Vec<OsString> {
	fn from(v: ArgsHelper) -> Self {
		return v.into_inner();
	}
}

/// Helper Function to assemble all ytdl command arguments
/// Returns a list of arguments for youtube-dl in order
///
/// Also creates the output directory if it does not exist yet
#[inline]
pub fn assemble_ytdl_command<A: DownloadOptions>(options: &A) -> Result<Vec<OsString>, crate::Error> {
	let mut ytdl_args = ArgsHelper::new();

	let output_dir = options.download_path();
	debug!("YTDL Output dir is \"{}\"", output_dir.to_string_lossy());

	if output_dir.exists() && !output_dir.is_dir() {
		return Err(crate::Error::not_a_directory(
			"Output path exists but is not a directory",
			output_dir,
		));
	}

	std::fs::create_dir_all(output_dir).attach_path_err(output_dir)?;

	// set the format that should be downloaded
	ytdl_args.arg("-f").arg(options.format_selector());

	// apply options to make output audio-only
	if options.audio_only() {
		// set ytdl to always extract the audio, if it is not already audio-only
		ytdl_args.arg("-x");
		// set the output audio format
		ytdl_args.arg("--audio-format").arg(AUDIO_FORMAT);
		// set the output audio bitrate
		ytdl_args.arg("--audio-quality").arg(AUDIO_QUALITY);
	}

	// write the media's metadata as a seperate json file
	ytdl_args.arg("--write-info-json");

	// write the media's thumbnail as a seperate file
	ytdl_args.arg("--write-thumbnail");

	// stop after the requested amount of playlist entries
	if let Some(end) = options.playlist_end() {
		ytdl_args.arg("--playlist-end").arg(end.to_string());
	}

	// ensure ytdl is printing progress reports
	ytdl_args.arg("--progress");
	// ensure ytdl prints the progress reports on a new line
	ytdl_args.arg("--newline");

	// set the output directory and template for ytdl
	let output_template = if options.playlist() {
		output_dir.join(PLAYLIST_OUTPUT_TEMPLATE)
	} else {
		output_dir.join(SINGLE_OUTPUT_TEMPLATE)
	};
	ytdl_args.arg("-o").arg(output_template);

	// apply all extra arguments
	for extra_arg in options.extra_ytdl_arguments() {
		ytdl_args.arg(extra_arg);
	}

	// apply the url to download as the last argument
	ytdl_args.arg(options.get_url());

	return Ok(ytdl_args.into());
}
