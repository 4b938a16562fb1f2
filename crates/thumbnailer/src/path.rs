use crate::ThumbnailerConfig;

use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};

use wt_images::GENERIC_EXTENSIONS;

/// Appended to the source file stem to name its thumbnail.
pub const THUMBNAIL_SUFFIX: &str = "-thumb.webp";

/// What a walked path turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	/// Branding asset, never thumbnailed
	Logo,
	/// Accepted image that should get a thumbnail
	Candidate,
	/// Not an image we handle
	Ignored,
}

/// `marker` is expected to already be lowercase.
#[must_use]
pub fn is_logo(path: impl AsRef<Path>, marker: &str) -> bool {
	path.as_ref()
		.to_string_lossy()
		.to_lowercase()
		.contains(marker)
}

/// True for `.png`, `.jpg` and `.jpeg`, in any case.
#[must_use]
pub fn has_accepted_extension(path: impl AsRef<Path>) -> bool {
	path.as_ref()
		.extension()
		.and_then(|ext| ext.to_str())
		.is_some_and(|ext| {
			GENERIC_EXTENSIONS
				.iter()
				.any(|accepted| ext.eq_ignore_ascii_case(accepted))
		})
}

#[must_use]
pub fn classify(path: impl AsRef<Path>, config: &ThumbnailerConfig) -> Classification {
	let path = path.as_ref();

	if !has_accepted_extension(path) {
		Classification::Ignored
	} else if is_logo(path, config.logo_marker()) {
		Classification::Logo
	} else {
		Classification::Candidate
	}
}

/// `animals/cat.png` -> `animals/cat-thumb.webp`
#[must_use]
pub fn thumbnail_path(path: impl AsRef<Path>) -> PathBuf {
	let path = path.as_ref();

	let mut name = path.file_stem().map_or_else(OsString::new, ToOwned::to_owned);
	name.push(THUMBNAIL_SUFFIX);

	path.with_file_name(name)
}
