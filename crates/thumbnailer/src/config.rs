use crate::Error;

use std::path::{Path, PathBuf};

use wt_images::{WebpSettings, GENERIC_MAXIMUM_FILE_SIZE};

/// Folder scanned when nothing else is configured.
pub const DEFAULT_ROOT: &str = "assets/coloring";

/// Thumbnails wider than this are scaled down, height follows the aspect ratio.
pub const DEFAULT_MAX_WIDTH: u32 = 450;

/// Any path containing this (case-insensitively) is treated as branding and left alone.
pub const DEFAULT_LOGO_MARKER: &str = "logo";

/// `ThumbnailerConfig` holds data from a `ThumbnailerBuilder`, read by [`crate::generate`] and
/// [`crate::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailerConfig {
	root: PathBuf,
	max_width: u32,
	webp: WebpSettings,
	logo_marker: String,
	maximum_file_size: u64,
}

impl Default for ThumbnailerConfig {
	fn default() -> Self {
		ThumbnailerBuilder::default().build()
	}
}

impl ThumbnailerConfig {
	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}

	#[must_use]
	pub const fn max_width(&self) -> u32 {
		self.max_width
	}

	#[must_use]
	pub const fn webp(&self) -> WebpSettings {
		self.webp
	}

	/// Always lowercase
	#[must_use]
	pub fn logo_marker(&self) -> &str {
		&self.logo_marker
	}

	#[must_use]
	pub const fn maximum_file_size(&self) -> u64 {
		self.maximum_file_size
	}
}

/// `ThumbnailerBuilder` struct holds data to build a `ThumbnailerConfig`, validating each
/// value as it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailerBuilder {
	root: PathBuf,
	max_width: u32,
	webp: WebpSettings,
	logo_marker: String,
	maximum_file_size: u64,
}

impl Default for ThumbnailerBuilder {
	fn default() -> Self {
		Self {
			root: PathBuf::from(DEFAULT_ROOT),
			max_width: DEFAULT_MAX_WIDTH,
			webp: WebpSettings::default(),
			logo_marker: DEFAULT_LOGO_MARKER.to_string(),
			maximum_file_size: GENERIC_MAXIMUM_FILE_SIZE,
		}
	}
}

impl ThumbnailerBuilder {
	/// Creates a new `ThumbnailerBuilder` with default values:
	/// - `root`: `assets/coloring`
	/// - `max_width`: 450 pixels
	/// - `quality`: 70
	/// - `method`: 6
	/// - `logo_marker`: `"logo"`
	/// - `maximum_file_size`: 256 MiB
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Directory that will be walked recursively
	#[must_use]
	pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
		self.root = root.into();
		self
	}

	/// Maximum thumbnail width, must be at least 1
	pub fn max_width(mut self, max_width: u32) -> Result<Self, Error> {
		if max_width == 0 {
			return Err(Error::InvalidMaxWidth);
		}
		self.max_width = max_width;
		Ok(self)
	}

	/// Quality must be a value between 0.0 and 100.0
	pub fn quality(mut self, quality: f32) -> Result<Self, Error> {
		self.webp = WebpSettings::new(quality, self.webp.method())?;
		Ok(self)
	}

	/// Method must be a value between 0 and 6, higher is slower but smaller
	pub fn method(mut self, method: u8) -> Result<Self, Error> {
		self.webp = WebpSettings::new(self.webp.quality(), method)?;
		Ok(self)
	}

	/// Substring that marks a path as a logo/branding asset
	#[must_use]
	pub fn logo_marker(mut self, marker: impl AsRef<str>) -> Self {
		self.logo_marker = marker.as_ref().to_lowercase();
		self
	}

	/// Source files bigger than this many bytes fail instead of being decoded
	#[must_use]
	pub fn maximum_file_size(mut self, bytes: u64) -> Self {
		self.maximum_file_size = bytes;
		self
	}

	/// Builds a `ThumbnailerConfig` struct
	#[must_use]
	pub fn build(self) -> ThumbnailerConfig {
		let Self {
			root,
			max_width,
			webp,
			logo_marker,
			maximum_file_size,
		} = self;

		ThumbnailerConfig {
			root,
			max_width,
			webp,
			logo_marker,
			maximum_file_size,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = ThumbnailerConfig::default();
		assert_eq!(config.root(), Path::new("assets/coloring"));
		assert_eq!(config.max_width(), 450);
		assert!((config.webp().quality() - 70.0).abs() < f32::EPSILON);
		assert_eq!(config.webp().method(), wt_images::MAX_WEBP_METHOD);
		assert_eq!(config.logo_marker(), "logo");
		assert_eq!(config.maximum_file_size(), GENERIC_MAXIMUM_FILE_SIZE);
	}

	#[test]
	fn builder_rejects_bad_values() {
		assert!(matches!(
			ThumbnailerBuilder::new().max_width(0),
			Err(Error::InvalidMaxWidth)
		));
		assert!(matches!(
			ThumbnailerBuilder::new().quality(101.0),
			Err(Error::Images(wt_images::Error::InvalidQuality(_)))
		));
		assert!(matches!(
			ThumbnailerBuilder::new().method(9),
			Err(Error::Images(wt_images::Error::InvalidMethod(9)))
		));
	}

	#[test]
	fn builder_applies_values() {
		let config = ThumbnailerBuilder::new()
			.root("/srv/pictures")
			.logo_marker("BRAND")
			.maximum_file_size(1024)
			.quality(55.0)
			.and_then(|b| b.method(4))
			.and_then(|b| b.max_width(200))
			.unwrap()
			.build();

		assert_eq!(config.root(), Path::new("/srv/pictures"));
		assert_eq!(config.max_width(), 200);
		assert_eq!(config.webp().method(), 4);
		assert!((config.webp().quality() - 55.0).abs() < f32::EPSILON);
		assert_eq!(config.logo_marker(), "brand");
		assert_eq!(config.maximum_file_size(), 1024);
	}
}
