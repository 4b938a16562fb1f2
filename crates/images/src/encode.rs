use crate::{
	consts::MAX_WEBP_METHOD,
	error::{Error, Result},
};
use image::DynamicImage;
use std::{ops::Deref, os::raw::c_int};
use webp::{Encoder, WebPConfig};

/// Lossy WebP knobs handed straight to libwebp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebpSettings {
	quality: f32,
	method: u8,
}

impl Default for WebpSettings {
	fn default() -> Self {
		Self {
			quality: 70.0,
			method: MAX_WEBP_METHOD,
		}
	}
}

impl WebpSettings {
	/// Quality must be a value between 0.0 and 100.0, method between 0 (fast) and 6 (smallest)
	pub fn new(quality: f32, method: u8) -> Result<Self> {
		if !(0.0..=100.0).contains(&quality) {
			return Err(Error::InvalidQuality(quality));
		}
		if method > MAX_WEBP_METHOD {
			return Err(Error::InvalidMethod(method));
		}
		Ok(Self { quality, method })
	}

	#[must_use]
	pub const fn quality(&self) -> f32 {
		self.quality
	}

	#[must_use]
	pub const fn method(&self) -> u8 {
		self.method
	}
}

/// Encodes `img` as a lossy WebP and hands back the raw file bytes.
pub fn encode_webp(img: &DynamicImage, settings: WebpSettings) -> Result<Vec<u8>> {
	// libwebp only takes interleaved RGB or RGBA buffers
	let expanded;
	let img = match img {
		DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
		other => {
			expanded = DynamicImage::ImageRgb8(other.to_rgb8());
			&expanded
		}
	};

	let encoder = Encoder::from_image(img).map_err(|e| Error::WebpEncoder(e.to_string()))?;

	let mut config = WebPConfig::new()
		.map_err(|()| Error::WebpEncoder("libwebp rejected the default config".to_string()))?;
	config.lossless = 0;
	config.quality = settings.quality;
	config.method = c_int::from(settings.method);

	// WebPMemory frees itself on drop, so copy the bytes out before it goes away
	Ok(encoder
		.encode_advanced(&config)
		.map_err(|e| Error::WebpEncode(format!("{e:?}")))?
		.deref()
		.to_vec())
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{GenericImageView, GrayImage, Luma, Rgb, RgbImage, RgbaImage};

	fn assert_webp(bytes: &[u8], dimensions: (u32, u32)) {
		assert!(bytes.len() > 12);
		assert_eq!(&bytes[0..4], b"RIFF");
		assert_eq!(&bytes[8..12], b"WEBP");

		let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::WebP).unwrap();
		assert_eq!(decoded.dimensions(), dimensions);
	}

	#[test]
	fn encodes_rgb() {
		let img = RgbImage::from_fn(64, 32, |x, y| Rgb([(x * 4) as u8, (y * 8) as u8, 128]));
		let bytes = encode_webp(&DynamicImage::ImageRgb8(img), WebpSettings::default()).unwrap();
		assert_webp(&bytes, (64, 32));
	}

	#[test]
	fn encodes_grayscale_by_expanding_it() {
		let img = GrayImage::from_fn(20, 10, |x, _| Luma([(x * 10) as u8]));
		let bytes = encode_webp(&DynamicImage::ImageLuma8(img), WebpSettings::default()).unwrap();
		assert_webp(&bytes, (20, 10));
	}

	#[test]
	fn encodes_rgba() {
		let img = DynamicImage::ImageRgba8(RgbaImage::new(16, 16));
		let bytes = encode_webp(&img, WebpSettings::default()).unwrap();
		assert_webp(&bytes, (16, 16));
	}

	#[test]
	fn defaults_match_thumbnail_settings() {
		let settings = WebpSettings::default();
		assert!((settings.quality() - 70.0).abs() < f32::EPSILON);
		assert_eq!(settings.method(), 6);
	}

	#[test]
	fn rejects_out_of_range_settings() {
		assert!(matches!(
			WebpSettings::new(100.5, 6),
			Err(Error::InvalidQuality(_))
		));
		assert!(matches!(
			WebpSettings::new(-1.0, 6),
			Err(Error::InvalidQuality(_))
		));
		assert!(matches!(WebpSettings::new(70.0, 7), Err(Error::InvalidMethod(7))));
		assert!(WebpSettings::new(0.0, 0).is_ok());
	}
}
