use crate::{is_logo, thumbnail_path, Error, FileIOError, ThumbnailerConfig};

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use tracing::{error, info, trace};
use wt_images::{encode_webp, format_image_with_limit, normalize, scale_to_width};

/// How a single source image was dealt with
#[derive(Debug)]
pub enum Outcome {
	/// Source path looked like branding, nothing was read or written
	SkippedLogo(PathBuf),
	/// Holds the thumbnail path that was already on disk
	SkippedExisting(PathBuf),
	Failed {
		path: PathBuf,
		error: Error,
	},
	/// Holds the freshly written thumbnail path
	Created(PathBuf),
}

impl Outcome {
	#[must_use]
	pub const fn is_created(&self) -> bool {
		matches!(self, Self::Created(_))
	}
}

/// Creates a WebP thumbnail next to `path`, unless it's a logo or the thumbnail already exists.
///
/// Never fails as a whole: decode, encode and write errors end up in [`Outcome::Failed`] so the
/// caller can carry on with the next file.
pub fn generate(path: impl AsRef<Path>, config: &ThumbnailerConfig) -> Outcome {
	let path = path.as_ref();

	if is_logo(path, config.logo_marker()) {
		info!("Skipping logo/branding image: {}", path.display());
		return Outcome::SkippedLogo(path.to_path_buf());
	}

	let output_path = thumbnail_path(path);

	match fs::metadata(&output_path) {
		Ok(_) => {
			info!(
				"Thumbnail already exists, skipping: {}",
				output_path.display()
			);
			return Outcome::SkippedExisting(output_path);
		}
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			trace!("Writing {} to {}", path.display(), output_path.display());
		}
		Err(e) => {
			let error = Error::from(FileIOError::from((
				&output_path,
				e,
				"checking for an existing thumbnail",
			)));
			error!("Error processing {}: {error}", path.display());
			return Outcome::Failed {
				path: path.to_path_buf(),
				error,
			};
		}
	}

	match generate_image_thumbnail(path, &output_path, config) {
		Ok(()) => {
			info!("Created thumbnail: {}", output_path.display());
			Outcome::Created(output_path)
		}
		Err(error) => {
			error!("Error processing {}: {error}", path.display());
			Outcome::Failed {
				path: path.to_path_buf(),
				error,
			}
		}
	}
}

// The decoded buffer only lives for the duration of this call
fn generate_image_thumbnail(
	file_path: &Path,
	output_path: &Path,
	config: &ThumbnailerConfig,
) -> Result<(), Error> {
	let img = format_image_with_limit(file_path, config.maximum_file_size())?;
	let img = scale_to_width(normalize(img), config.max_width());

	let webp = encode_webp(&img, config.webp())?;
	drop(img);

	if let Err(e) = fs::write(output_path, &webp) {
		// A truncated file would pass for a finished thumbnail on the next run
		if let Err(remove_err) = fs::remove_file(output_path) {
			if remove_err.kind() != io::ErrorKind::NotFound {
				error!(
					"Failed to remove partial thumbnail: {:#?}",
					FileIOError::from((output_path, remove_err))
				);
			}
		}
		return Err(FileIOError::from((output_path, e, "writing thumbnail")).into());
	}

	Ok(())
}
