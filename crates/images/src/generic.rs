use crate::{consts::GENERIC_MAXIMUM_FILE_SIZE, ImageHandler, Result};
use image::DynamicImage;
use std::path::Path;

/// Decodes anything the `image` crate understands, guessing the format from the file contents.
pub struct GenericHandler {
	pub maximum_size: u64,
}

impl Default for GenericHandler {
	fn default() -> Self {
		Self {
			maximum_size: GENERIC_MAXIMUM_FILE_SIZE,
		}
	}
}

impl ImageHandler for GenericHandler {
	fn maximum_size(&self) -> u64 {
		self.maximum_size
	}

	fn handle_image(&self, path: &Path) -> Result<DynamicImage> {
		let data = self.get_data(path)?; // this also makes sure the file isn't above the maximum size
		Ok(image::load_from_memory(&data)?)
	}
}
