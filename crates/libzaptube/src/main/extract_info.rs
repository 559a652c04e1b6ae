//! Module for fetching media metadata without downloading anything

use std::{
	io::Read,
	process::Stdio,
	thread,
};

use crate::{
	data::media_metadata::MediaMetadata,
	error::{
		CustomThreadJoin,
		IOErrorToError,
	},
};

/// Spawn ytdl in metadata-only mode and parse the output into a [`MediaMetadata`]
/// Wrapper for [`extract_info_with_command`] with [`crate::spawn::ytdl::base_ytdl`]
///
/// ytdl's own warnings are suppressed, only actual errors reach stderr (and the logs)
pub fn extract_info<T: AsRef<str>>(url: T) -> Result<MediaMetadata, crate::Error> {
	let mut cmd = crate::spawn::ytdl::base_ytdl();
	cmd.args(["--dump-single-json", "--no-warnings", "--quiet", url.as_ref()]);

	return extract_info_with_command(cmd);
}

/// Spawn the `cmd` and parse its STDOUT into a [`MediaMetadata`]
///
/// This function should not be used directly, use [`extract_info`] instead
pub fn extract_info_with_command(mut cmd: std::process::Command) -> Result<MediaMetadata, crate::Error> {
	// create a command and spawn it
	let mut child = {
		cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).stdin(Stdio::null());

		cmd.spawn().attach_location_err("ytdl spawn")?
	};

	let mut stdout_reader = child.stdout.take().ok_or_else(|| {
		return crate::Error::custom_ioerror_location(
			std::io::ErrorKind::BrokenPipe,
			"Failed to get Child STDOUT",
			"ytdl stdout",
		);
	})?;

	let stderr_reader = std::io::BufReader::new(child.stderr.take().ok_or_else(|| {
		return crate::Error::custom_ioerror_location(
			std::io::ErrorKind::BrokenPipe,
			"Failed to get Child STDERR",
			"ytdl stderr",
		);
	})?);

	// offload the stderr reader to a different thread to not block main
	// the last "ERROR:" line is kept to improve the failure message
	let stderrreader_thread = thread::Builder::new()
		.name("ytdl stderr handler".to_owned())
		.spawn(move || {
			use std::io::BufRead;

			let mut last_error_line: Option<String> = None;

			stderr_reader.lines().filter_map(|v| return v.ok()).for_each(|line| {
				if line.starts_with("ERROR:") {
					last_error_line = Some(line.clone());
				}
				log::info!("ytdl STDERR: {}", line);
			});

			return last_error_line;
		})
		.attach_location_err("ytdl stderr thread spawn")?;

	// the full stdout has to be read before "wait", otherwise a filled pipe could deadlock the child
	let mut stdout_buf = Vec::new();
	stdout_reader
		.read_to_end(&mut stdout_buf)
		.attach_location_err("ytdl stdout read")?;

	let last_error_line = stderrreader_thread.join_err()?;

	let exit_status = child.wait().attach_location_err("ytdl wait")?;

	if !exit_status.success() {
		// prefer the parsed "ERROR:" line as the description, the exit status alone says very little
		return Err(crate::Error::command_unsuccessful(last_error_line.unwrap_or_else(
			|| {
				return format!("ytdl did not successfully exit: {}", exit_status);
			},
		)));
	}

	let metadata: MediaMetadata = serde_json::from_slice(&stdout_buf)?;

	return Ok(metadata);
}

#[cfg(test)]
mod test {
	use crate::data::media_metadata::MediaFormat;

	use super::*;

	#[test]
	fn test_basic_func() {
		let mut fake_command = std::process::Command::new("echo");
		fake_command.arg(
			r#"{"title": "Some Title", "duration": 212.0, "uploader": "Some Uploader", "view_count": 1000, "upload_date": "20240101", "description": "Some Description", "formats": [{"format_id": "18", "height": 360}, {"format_id": "251"}]}"#,
		);

		let output = extract_info_with_command(fake_command);

		assert!(output.is_ok());
		let metadata = output.expect("Expected Assert to test Result to be OK");

		assert_eq!(Some("Some Title".to_owned()), metadata.title);
		assert_eq!(Some("Some Uploader".to_owned()), metadata.uploader);
		assert_eq!(Some(1000), metadata.view_count);
		assert_eq!(
			vec![MediaFormat::new("18", Some(360)), MediaFormat::new("251", None)],
			metadata.formats
		);
	}

	#[test]
	fn test_missing_optional_fields() {
		let mut fake_command = std::process::Command::new("echo");
		fake_command.arg(r#"{"title": "Only a Title"}"#);

		let output = extract_info_with_command(fake_command);

		assert!(output.is_ok());
		let metadata = output.expect("Expected Assert to test Result to be OK");

		assert_eq!(Some("Only a Title".to_owned()), metadata.title);
		assert_eq!(None, metadata.duration);
		assert_eq!(None, metadata.uploader);
		assert!(metadata.formats.is_empty());
	}

	#[test]
	fn test_err_invalid_json() {
		let mut fake_command = std::process::Command::new("echo");
		fake_command.arg("this is not json");

		let output = extract_info_with_command(fake_command);

		assert!(output.is_err());
	}

	#[test]
	fn test_err_exit_status() {
		let mut fake_command = std::process::Command::new("sh");
		fake_command.args([
			"-c", // random exit code that is non-0
			"exit 1",
		]);

		let output = extract_info_with_command(fake_command);

		assert_eq!(
			Err(crate::Error::command_unsuccessful(
				"ytdl did not successfully exit: exit status: 1".to_owned(),
			)),
			output
		);
	}

	#[test]
	fn test_err_exit_status_includes_error_line() {
		let mut fake_command = std::process::Command::new("sh");
		fake_command.args([
			"-c", // print a ytdl-like error line to stderr and exit non-0
			"echo 'ERROR: Unsupported URL: https://example.com' >&2; exit 1",
		]);

		let output = extract_info_with_command(fake_command);

		assert_eq!(
			Err(crate::Error::command_unsuccessful(
				"ERROR: Unsupported URL: https://example.com".to_owned(),
			)),
			output
		);
	}
}
