//! Module for handling youtube-dl downloads

use std::{
	io::{
		BufRead,
		BufReader,
	},
	time::Duration,
};

use assemble_cmd::assemble_ytdl_command;
use parse_linetype::LineType;

use crate::{
	error::IOErrorToError,
	spawn::ytdl::YTDL_BIN_NAME,
	traits::download_options::DownloadOptions,
};

pub use assemble_cmd::{
	AUDIO_FORMAT,
	AUDIO_QUALITY,
	PLAYLIST_OUTPUT_TEMPLATE,
	SINGLE_OUTPUT_TEMPLATE,
};

mod assemble_cmd;
mod parse_linetype;

/// Enum for callbacks to know what is currently happening
/// All Variants have a certian order in which they are called (like Starting is always before any Progress)
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadProgress {
	/// Variant representing that the download of a url is starting
	Starting,
	/// Variant representing that ytdl started writing a new file
	/// values: (file name)
	Destination(String),
	/// Variant representing the percentage of the current media
	/// values: (progress)
	Progress(u8),
	/// Variant representing that the download of the url has finished
	Finished,
}

/// Download a single URL (which may be a playlist) with the given options
/// Assumes ytdl and ffmpeg have already been checked to exist and work (like using [`crate::spawn::ytdl::require_ytdl_installed`])
///
/// Any "ERROR:" line ytdl emits fails the whole operation with that line as the description,
/// there is no per-entry failure reporting for playlists
pub fn download_single<A: DownloadOptions, C: FnMut(DownloadProgress)>(
	options: &A,
	pgcb: C,
) -> Result<(), crate::Error> {
	let ytdl_child = {
		let args = assemble_ytdl_command(options)?;

		// merge stderr into stdout, because ytdl prints progress to stdout but errors to stderr
		duct::cmd(YTDL_BIN_NAME, args)
			.stderr_to_stdout()
			.reader()
			.attach_location_err("duct ytdl reader")?
	};

	let stdout_reader = BufReader::new(&ytdl_child);

	let last_error = handle_stdout(options, pgcb, stdout_reader)?;

	let mut exit_error = None;

	loop {
		// wait loop, because somehow a "ReaderHandle" does not implement "wait", only "try_wait", but have to wait for it to exit here
		match ytdl_child.try_wait() {
			Ok(v) => {
				// only in the "Some" case is the wait actually finished
				if v.is_some() {
					break;
				}
			},
			Err(err) => {
				// duct returns a Err for non-0 exit codes, which is how a failed download is detected here
				debug!("youtube-dl exited with a non-0 code: {err}");
				exit_error = Some(err);
				break;
			},
		}

		std::thread::sleep(Duration::from_millis(100)); // sleep to save some time between the next wait (to not cause constant cpu spike)
	}

	// a parsed "ERROR:" line is the most descriptive failure, prefer it over the plain exit status
	if let Some(last_error) = last_error {
		return Err(last_error);
	}

	if let Some(exit_error) = exit_error {
		return Err(crate::Error::command_unsuccessful(format!(
			"{} did not successfully exit: {}",
			YTDL_BIN_NAME, exit_error
		)));
	}

	return Ok(());
}

/// Helper function to handle the output from a spawned ytdl command
/// Returns the last encountered "ERROR:" line, if any
#[inline]
fn handle_stdout<A: DownloadOptions, C: FnMut(DownloadProgress), R: BufRead>(
	options: &A,
	mut pgcb: C,
	reader: R,
) -> Result<Option<crate::Error>, crate::Error> {
	// report that the downloading is now starting
	pgcb(DownloadProgress::Starting);

	// cache the bool for "print_command_log" to not execute the function for every line (should be a static value)
	let print_log = options.print_command_log();

	// store the last error line encountered
	let mut last_error: Option<crate::Error> = None;

	// HACK: .lines() iter never exits on non-0 exit codes in duct, see https://github.com/oconnor663/duct.rs/issues/112
	for line in reader.lines() {
		let line = match line {
			Ok(v) => v,
			Err(err) => {
				debug!("duct lines reader errored: {}", err);
				break; // handle it as a non-breaking case, because in 99% of cases it is just a error of "command ... exited with code ?"
			},
		};

		// only print output lines to log when requested
		if print_log {
			trace!("ytdl: \"{}\"", line);
		}

		if let Some(linetype) = LineType::try_from_line(&line) {
			match linetype {
				// currently there is nothing that needs to be done with "Ffmpeg" lines
				LineType::Ffmpeg
				// currently there is nothing that needs to be done with "ProviderSpecific" Lines
				| LineType::ProviderSpecific
				// currently there is nothing that needs to be done with "Generic" Lines
				| LineType::Generic => (),
				LineType::Download => {
					if let Some(filename) = linetype.try_get_destination(&line) {
						pgcb(DownloadProgress::Destination(filename));
					} else if let Some(percent) = linetype.try_get_download_percent(&line) {
						pgcb(DownloadProgress::Progress(percent));
					}
				},
				LineType::Error => {
					// the following is using debug printing, because the line may include escape characters, which would mess-up the printing, but is still good to know when reading
					warn!("Encountered youtube-dl error: {:#?}", line);
					last_error = Some(crate::Error::other(line));
				},
				LineType::Warning => {
					// ytdl warnings are non-fatal, but should still be logged
					warn!("youtube-dl: {:#?}", line);
				},
			}
		} else if !line.is_empty() {
			info!("No type has been found for line \"{}\"", line);
		}
	}

	// report that downloading is now finished
	pgcb(DownloadProgress::Finished);

	return Ok(last_error);
}


#[cfg(test)]
mod test {
	use std::io::Cursor;

	use super::{
		test_utils::TestOptions,
		*,
	};

	fn collect_events(input: &str) -> (Vec<DownloadProgress>, Option<crate::Error>) {
		let options = TestOptions::new_video(std::path::PathBuf::from("/tmp"), "someURL".to_owned(), "best");

		let mut events = Vec::new();
		let last_error = handle_stdout(&options, |ev| events.push(ev), Cursor::new(input.to_owned()))
			.expect("Expected handle_stdout to not fail");

		return (events, last_error);
	}

	#[test]
	fn test_handle_stdout_basic_progress() {
		let input = "[youtube] someid: Downloading webpage
[download] Destination: downloads/Some Title.mp4
[download]   0.0% of 51.32MiB at 160.90KiB/s ETA 05:29
[download]  50.0% of 51.32MiB at 160.90KiB/s ETA 02:45
[download] 100% of 51.32MiB in 05:29
";

		let (events, last_error) = collect_events(input);

		assert!(last_error.is_none());
		assert_eq!(
			vec![
				DownloadProgress::Starting,
				DownloadProgress::Destination("Some Title.mp4".to_owned()),
				DownloadProgress::Progress(0),
				DownloadProgress::Progress(50),
				DownloadProgress::Progress(100),
				DownloadProgress::Finished,
			],
			events
		);
	}

	#[test]
	fn test_handle_stdout_error_line_is_kept() {
		let input = "[youtube] someid: Downloading webpage
ERROR: [youtube] someid: Video unavailable
";

		let (events, last_error) = collect_events(input);

		assert_eq!(
			Some(crate::Error::other("ERROR: [youtube] someid: Video unavailable")),
			last_error
		);
		assert_eq!(vec![DownloadProgress::Starting, DownloadProgress::Finished], events);
	}

	#[test]
	fn test_handle_stdout_warning_is_not_a_error() {
		let input = "WARNING: [youtube] Falling back to generic n function search
[download] 100% of 2.16MiB in 00:00
";

		let (events, last_error) = collect_events(input);

		assert!(last_error.is_none());
		assert_eq!(
			vec![
				DownloadProgress::Starting,
				DownloadProgress::Progress(100),
				DownloadProgress::Finished,
			],
			events
		);
	}
}
