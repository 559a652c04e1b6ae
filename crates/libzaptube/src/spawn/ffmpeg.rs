//! Module that contains all logic for spawning the "ffmpeg" command
use std::{
	process::{
		Command,
		Output,
		Stdio,
	},
	sync::LazyLock,
};

use regex::Regex;

use crate::error::IOErrorToError;

/// Binary name to spawn for the ffmpeg process
pub const FFMPEG_BIN_NAME: &str = "ffmpeg";

/// Create a new [FFMPEG_BIN_NAME] [Command] instance
#[inline]
#[must_use]
pub fn base_ffmpeg() -> Command {
	let mut cmd = Command::new(FFMPEG_BIN_NAME);

	// explicitly disable interactive mode
	cmd.arg("-nostdin");

	return cmd;
}

/// Test if ffmpeg is installed and reachable
/// ffmpeg is required for audio extraction and thumbnail conversion, which yt-dlp delegates to it
pub fn require_ffmpeg_installed() -> Result<String, crate::Error> {
	return match ffmpeg_version() {
		Ok(v) => Ok(v),
		Err(err) => {
			log::error!("Could not start or find ffmpeg! Error: {}", err);

			return Err(crate::Error::custom_ioerror_location(
				std::io::ErrorKind::NotFound,
				"FFmpeg Version could not be determined, is it installed and reachable?",
				format!("{} in PATH", FFMPEG_BIN_NAME),
			));
		},
	};
}

/// Regex to parse the version from a "ffmpeg -version" output
/// cap1: version
static FFMPEG_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	return Regex::new(r"(?mi)^ffmpeg version ([a-z0-9.-]+) Copyright").unwrap();
});

/// Get Version of [`FFMPEG_BIN_NAME`]
#[inline]
pub fn ffmpeg_version() -> Result<String, crate::Error> {
	let mut cmd = base_ffmpeg();
	cmd.arg("-version");

	let command_output: Output = cmd
		.stderr(Stdio::null())
		.stdout(Stdio::piped())
		.stdin(Stdio::null())
		.spawn()
		.attach_location_err("ffmpeg spawn")?
		.wait_with_output()
		.attach_location_err("ffmpeg wait_with_output")?;

	if !command_output.status.success() {
		return Err(crate::Error::command_unsuccessful("FFMPEG did not successfully exit!"));
	}

	let as_string = String::from_utf8(command_output.stdout)?;

	return ffmpeg_parse_version(&as_string);
}

/// Internal Function to parse the input to a ffmpeg version with regex
#[inline]
fn ffmpeg_parse_version(input: &str) -> Result<String, crate::Error> {
	return Ok(FFMPEG_VERSION_REGEX
		.captures_iter(input)
		.next()
		.ok_or_else(|| return crate::Error::no_captures("FFMPEG Version could not be determined"))?[1]
		.to_owned());
}

#[cfg(test)]
mod test {
	use super::ffmpeg_version;

	#[test]
	fn test_ffmpeg_parse_version_invalid_input() {
		assert_eq!(
			super::ffmpeg_parse_version("hello"),
			Err(crate::Error::no_captures("FFMPEG Version could not be determined"))
		);
	}

	#[test]
	fn test_ffmpeg_parse_version_valid_static_input() {
		let ffmpeg_output = "ffmpeg version n7.1 Copyright (c) 2000-2024 the FFmpeg developers
built with gcc 14.2.1 (GCC)
libavutil      59. 39.100 / 59. 39.100
libavcodec     61. 19.100 / 61. 19.100
";

		assert_eq!(super::ffmpeg_parse_version(ffmpeg_output), Ok("n7.1".to_owned()));
	}

	#[test]
	#[ignore = "CI Install not present currently"]
	fn test_ffmpeg_spawn() {
		assert!(ffmpeg_version().is_ok());
	}
}
