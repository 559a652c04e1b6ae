//! Module for all main functionality, like downloading and metadata extraction

pub mod download;
pub mod extract_info;
