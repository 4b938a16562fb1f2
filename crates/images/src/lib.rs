#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	clippy::expect_used,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::as_conversions,
	clippy::dbg_macro
)]
#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! The image side of thumbnail generation.
//!
//! Everything that touches pixels lives here, split into four steps:
//! [`format_image`] (decode), [`normalize`], [`scale_to_width`] and [`encode_webp`].
//! Callers only ever see [`DynamicImage`] and encoded bytes, so the underlying
//! codec crates can change without touching traversal or filtering code.

mod consts;
mod encode;
mod error;
mod generic;
mod handler;
mod transform;

pub use consts::{GENERIC_EXTENSIONS, GENERIC_MAXIMUM_FILE_SIZE, MAX_WEBP_METHOD};
pub use encode::{encode_webp, WebpSettings};
pub use error::{Error, Result};
pub use handler::{format_image, format_image_with_limit};
pub use image::DynamicImage;
pub use transform::{normalize, scale_to_width, scaled_dimensions};

use std::{fs, io::Read, path::Path};

pub trait ImageHandler {
	fn maximum_size(&self) -> u64
	where
		Self: Sized; // thanks vtables

	fn get_data(&self, path: &Path) -> Result<Vec<u8>>
	where
		Self: Sized,
	{
		let mut file = fs::File::open(path)?;
		if file.metadata()?.len() > self.maximum_size() {
			Err(Error::TooLarge(self.maximum_size()))
		} else {
			let mut data = vec![];
			file.read_to_end(&mut data)?;
			Ok(data)
		}
	}

	fn handle_image(&self, path: &Path) -> Result<DynamicImage>;
}
