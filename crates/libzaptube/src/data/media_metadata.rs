//! Module containing [`MediaMetadata`] and [`MediaFormat`]

use serde::Deserialize;

/// Placeholder used for display when the extractor did not provide a optional field
pub const NOT_AVAILABLE: &str = "N/A";

/// Metadata record for a single media, deserialized from the yt-dlp JSON dump
/// Every field besides "formats" is optional, because no provider gurantees all of them
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaMetadata {
	/// The title of the media
	pub title:       Option<String>,
	/// Duration in seconds, may be fractional depending on the provider
	pub duration:    Option<f64>,
	/// The name of the channel / account that uploaded the media
	pub uploader:    Option<String>,
	/// View count at extraction time
	pub view_count:  Option<u64>,
	/// Upload date in "YYYYMMDD" form
	pub upload_date: Option<String>,
	/// Full description text
	pub description: Option<String>,
	/// All formats the provider offers for this media
	#[serde(default)]
	pub formats:     Vec<MediaFormat>,
}

impl MediaMetadata {
	/// Get the title, or the placeholder if not provided
	#[must_use]
	pub fn title_display(&self) -> &str {
		return self.title.as_deref().unwrap_or(NOT_AVAILABLE);
	}

	/// Get the uploader, or the placeholder if not provided
	#[must_use]
	pub fn uploader_display(&self) -> &str {
		return self.uploader.as_deref().unwrap_or(NOT_AVAILABLE);
	}

	/// Get the duration rendered as whole seconds, or the placeholder if not provided
	#[must_use]
	pub fn duration_display(&self) -> String {
		return self
			.duration
			.map_or_else(|| return NOT_AVAILABLE.to_owned(), |v| return format!("{}", v.round() as u64));
	}

	/// Get the first `max_chars` characters of the description, or the placeholder if not provided
	/// Truncation is on character boundaries, not bytes
	#[must_use]
	pub fn description_snippet(&self, max_chars: usize) -> String {
		let Some(description) = self.description.as_deref() else {
			return NOT_AVAILABLE.to_owned();
		};

		return description.chars().take(max_chars).collect();
	}
}

/// A single format entry of a [`MediaMetadata`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaFormat {
	/// The format id, as used for yt-dlp format selection
	pub format_id: String,
	/// Video height in pixels, [`None`] for audio-only formats
	#[serde(default)]
	pub height:    Option<u64>,
}

impl MediaFormat {
	/// Create a new instance of [`MediaFormat`]
	pub fn new<I: AsRef<str>>(format_id: I, height: Option<u64>) -> Self {
		return Self {
			format_id: format_id.as_ref().into(),
			height,
		};
	}

	/// Render the format as a single display line, like `137 - 1080p` or `audio - N/Ap`
	#[must_use]
	pub fn label(&self) -> String {
		let height = self
			.height
			.map_or_else(|| return NOT_AVAILABLE.to_owned(), |v| return v.to_string());

		return format!("{} - {}p", self.format_id, height);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	/// Helper to get a [`MediaMetadata`] with no fields set
	fn empty_metadata() -> MediaMetadata {
		return MediaMetadata {
			title:       None,
			duration:    None,
			uploader:    None,
			view_count:  None,
			upload_date: None,
			description: None,
			formats:     Vec::new(),
		};
	}

	#[test]
	fn test_display_placeholders() {
		let metadata = empty_metadata();

		assert_eq!(NOT_AVAILABLE, metadata.title_display());
		assert_eq!(NOT_AVAILABLE, metadata.uploader_display());
		assert_eq!(NOT_AVAILABLE, metadata.duration_display());
		assert_eq!(NOT_AVAILABLE, metadata.description_snippet(100));
	}

	#[test]
	fn test_duration_rounds_to_whole_seconds() {
		let mut metadata = empty_metadata();
		metadata.duration = Some(212.091);

		assert_eq!("212", metadata.duration_display());
	}

	#[test]
	fn test_description_snippet_truncates_characters() {
		let mut metadata = empty_metadata();
		metadata.description = Some("a".repeat(150));

		assert_eq!(100, metadata.description_snippet(100).chars().count());

		// multi-byte characters should not panic and count as single characters
		metadata.description = Some("ä".repeat(150));
		assert_eq!(100, metadata.description_snippet(100).chars().count());

		// shorter descriptions are returned as-is
		metadata.description = Some("short".to_owned());
		assert_eq!("short", metadata.description_snippet(100));
	}

	#[test]
	fn test_format_label() {
		assert_eq!("137 - 1080p", MediaFormat::new("137", Some(1080)).label());
		assert_eq!("251 - N/Ap", MediaFormat::new("251", None).label());
	}

	#[test]
	fn test_deserialize_ignores_unknown_fields() {
		let input = r#"{
			"title": "Some Title",
			"duration": 123.4,
			"uploader": "Some Uploader",
			"view_count": 42,
			"upload_date": "20240101",
			"description": "Some Description",
			"webpage_url": "https://example.com/v1",
			"formats": [
				{"format_id": "18", "height": 360, "ext": "mp4"},
				{"format_id": "251"}
			]
		}"#;

		let metadata: MediaMetadata = serde_json::from_str(input).expect("Expected the JSON to deserialize");

		assert_eq!(Some("Some Title".to_owned()), metadata.title);
		assert_eq!(Some(123.4), metadata.duration);
		assert_eq!(Some(42), metadata.view_count);
		assert_eq!(
			vec![MediaFormat::new("18", Some(360)), MediaFormat::new("251", None)],
			metadata.formats
		);
	}

	#[test]
	fn test_deserialize_missing_optional_fields() {
		let input = r#"{"title": "Only a Title"}"#;

		let metadata: MediaMetadata = serde_json::from_str(input).expect("Expected the JSON to deserialize");

		assert_eq!(Some("Only a Title".to_owned()), metadata.title);
		assert_eq!(None, metadata.duration);
		assert!(metadata.formats.is_empty());
	}
}
