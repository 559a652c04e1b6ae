//! Module for all data types that are passed across the yt-dlp boundary

pub mod media_metadata;
pub mod quality;
