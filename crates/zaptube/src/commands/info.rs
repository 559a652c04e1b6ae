//! Module for the info-only mode

use libzaptube::{
	data::media_metadata::{
		MediaMetadata,
		NOT_AVAILABLE,
	},
	main::extract_info::extract_info,
};

use crate::clap_conf::CliDerive;

/// Maximal amount of formats listed in the report
const MAX_LISTED_FORMATS: usize = 10;

/// Handler function for the info-only mode
/// This function is mainly to keep the code structured and sorted
#[inline]
pub fn command_info(_main_args: &CliDerive, url: &str) -> Result<(), crate::Error> {
	let metadata = extract_info(url)?;

	print!("{}", render_info_report(&metadata));

	return Ok(());
}

/// Render the uppercase-keyed metadata report
/// Separated from printing so that the exact output can be tested
fn render_info_report(metadata: &MediaMetadata) -> String {
	let mut report = String::new();

	report.push_str("=== VIDEO INFORMATION ===\n");
	report.push_str(&format!("TITLE: {}\n", metadata.title_display()));
	report.push_str(&format!("DURATION: {}\n", metadata.duration_display()));
	report.push_str(&format!("UPLOADER: {}\n", metadata.uploader_display()));
	report.push_str(&format!(
		"VIEW_COUNT: {}\n",
		metadata
			.view_count
			.map_or_else(|| return NOT_AVAILABLE.to_owned(), |v| return v.to_string())
	));
	report.push_str(&format!(
		"UPLOAD_DATE: {}\n",
		metadata.upload_date.as_deref().unwrap_or(NOT_AVAILABLE)
	));
	report.push_str(&format!(
		"DESCRIPTION: {}\n",
		metadata.description.as_deref().unwrap_or(NOT_AVAILABLE)
	));

	report.push_str("FORMATS:\n");
	for format in metadata.formats.iter().take(MAX_LISTED_FORMATS) {
		report.push_str(&format!("  - {}\n", format.label()));
	}

	return report;
}
