use crate::{
	consts::{self, GENERIC_MAXIMUM_FILE_SIZE},
	error::{Error, Result},
	generic::GenericHandler,
	ImageHandler,
};
use image::DynamicImage;
use std::{ffi::OsStr, path::Path};

/// Fully decodes the image at `path`, picking a handler from its extension.
pub fn format_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
	format_image_with_limit(path, GENERIC_MAXIMUM_FILE_SIZE)
}

/// Same as [`format_image`], but refuses files bigger than `maximum_size` bytes.
pub fn format_image_with_limit(path: impl AsRef<Path>, maximum_size: u64) -> Result<DynamicImage> {
	let ext = path
		.as_ref()
		.extension()
		.map_or_else(|| Err(Error::NoExtension), |e| Ok(e.to_ascii_lowercase()))?;
	match_to_handler(&ext, maximum_size)?.handle_image(path.as_ref())
}

fn match_to_handler(ext: &OsStr, maximum_size: u64) -> Result<Box<dyn ImageHandler>> {
	if consts::GENERIC_EXTENSIONS.iter().any(|x| OsStr::new(x) == ext) {
		Ok(Box::new(GenericHandler { maximum_size }))
	} else {
		Err(Error::Unsupported)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::RgbImage;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn decodes_regardless_of_extension_case() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("upper.PNG");
		RgbImage::new(8, 4)
			.save_with_format(&path, image::ImageFormat::Png)
			.unwrap();

		let img = format_image(&path).unwrap();
		assert_eq!((img.width(), img.height()), (8, 4));
	}

	#[test]
	fn rejects_unknown_and_missing_extensions() {
		let dir = tempdir().unwrap();
		let gif = dir.path().join("anim.gif");
		fs::write(&gif, b"GIF89a").unwrap();
		let bare = dir.path().join("noext");
		fs::write(&bare, b"").unwrap();

		assert!(matches!(format_image(&gif), Err(Error::Unsupported)));
		assert!(matches!(format_image(&bare), Err(Error::NoExtension)));
	}

	#[test]
	fn corrupt_data_is_an_image_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.jpg");
		fs::write(&path, b"definitely not a jpeg").unwrap();

		assert!(matches!(format_image(&path), Err(Error::Image(_))));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempdir().unwrap();
		assert!(matches!(
			format_image(dir.path().join("ghost.png")),
			Err(Error::Io(_))
		));
	}

	#[test]
	fn respects_the_size_limit() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("big.png");
		RgbImage::new(32, 32).save(&path).unwrap();

		assert!(matches!(
			format_image_with_limit(&path, 16),
			Err(Error::TooLarge(16))
		));
	}
}
