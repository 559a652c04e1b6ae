//! Utils for the `zaptube` binary

use std::{
	io::Write,
	path::{
		Path,
		PathBuf,
	},
	sync::LazyLock,
};

use indicatif::{
	ProgressBar,
	ProgressDrawTarget,
	ProgressStyle,
};
use libzaptube::{
	error::IOErrorToError,
	main::download::{
		DownloadProgress,
		download_single,
	},
};

use crate::{
	clap_conf::CliDerive,
	state::DownloadState,
};

/// Static size the Download Progress Style will take (plus some spacers)
/// currently accounts for `[00:00:00] [########################################] 100% `
const STYLE_STATIC_SIZE: usize = 60;

/// Style used for all download progress bars
static DOWNLOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
	return ProgressStyle::default_bar()
		.template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
		.expect("Expected the download progress template to parse")
		.progress_chars("#>-");
});

/// Helper function to set the progressbar to a draw target if mode is interactive
pub fn set_progressbar(bar: &ProgressBar, main_args: &CliDerive) {
	if main_args.is_interactive() {
		bar.set_draw_target(ProgressDrawTarget::stderr());
	}
}

/// Resolve the configured output directory to a absolute path
/// The path is carried explicitly from here on, never the process CWD
pub fn to_absolute_output(path: &Path) -> Result<PathBuf, crate::Error> {
	return libzaptube::utils::to_absolute(path).attach_path_err(path);
}

/// Run a download for the prepared `download_state` with a progressbar wired to the ytdl output
pub fn run_download(main_args: &CliDerive, download_state: &DownloadState) -> Result<(), crate::Error> {
	let bar: ProgressBar = ProgressBar::hidden().with_style(DOWNLOAD_STYLE.clone());
	set_progressbar(&bar, main_args);
	bar.set_length(100);

	let is_interactive = main_args.is_interactive();

	let pgcb = |dpg| match dpg {
		DownloadProgress::Starting => bar.set_position(0),
		DownloadProgress::Destination(filename) => {
			if is_interactive {
				bar.println(format!("Downloading: {filename}"));
				bar.set_message(truncate_message_term_width(&filename));
				bar.set_position(0);
			} else {
				println!("Downloading: {filename}");
			}
		},
		DownloadProgress::Progress(percent) => bar.set_position(u64::from(percent)),
		DownloadProgress::Finished => bar.finish_and_clear(),
	};

	return download_single(download_state, pgcb);
}

/// Truncate a message to fit into the current terminal width next to the progressbar
/// Returns the input unchanged when no terminal size is available
pub fn truncate_message_term_width(input: &str) -> String {
	let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() else {
		return input.to_owned();
	};

	return truncate_message(input, usize::from(width).saturating_sub(STYLE_STATIC_SIZE));
}

/// Truncate a message to be at most `max_width` display-characters wide, adding "..." when truncated
/// Truncation happens on grapheme boundaries, not bytes or chars
fn truncate_message(input: &str, max_width: usize) -> String {
	use unicode_segmentation::UnicodeSegmentation;
	use unicode_width::UnicodeWidthStr;

	if UnicodeWidthStr::width(input) <= max_width {
		return input.to_owned();
	}

	let budget = max_width.saturating_sub(3); // reserve space for the "..." suffix

	let mut result = String::new();
	let mut current_width = 0_usize;

	for grapheme in input.graphemes(true) {
		let grapheme_width = UnicodeWidthStr::width(grapheme);

		if current_width + grapheme_width > budget {
			break;
		}

		current_width += grapheme_width;
		result.push_str(grapheme);
	}

	result.push_str("...");

	return result;
}

/// Get input from STDIN with "possible" or "default"
/// if using "default", remember to set a character in "possible" to upper-case
pub fn get_input(msg: &str, possible: &[&'static str], default: &'static str) -> Result<String, crate::Error> {
	let possible_converted = possible
		.iter()
		.map(|v| {
			return v.to_lowercase();
		})
		.collect::<Vec<String>>();
	// dont use "possible_converted" for "possible_converted_string", because otherwise the default will not be shown anymore
	let possible_converted_string = possible.join("/");
	loop {
		print!("{} [{}]: ", msg, possible_converted_string);
		// ensure the message is printed before reading
		std::io::stdout().flush().attach_location_err("stdout flush")?;
		// input buffer for "read_line", 1 capacity, because of only expecting 1 character
		let mut input = String::with_capacity(1);
		std::io::stdin()
			.read_line(&mut input)
			.attach_location_err("stdin read_line")?;

		let input = input.trim().to_lowercase();

		// return default if empty and default is set
		if input.is_empty() {
			if !default.is_empty() {
				return Ok(default.to_owned());
			}

			// special case when empty, to more emphasize that its empty
			println!("... Invalid Input: (Empty)");
			continue;
		}

		if possible_converted.contains(&input) {
			return Ok(input);
		}

		println!("... Invalid Input: \"{}\"", input);
	}
}
