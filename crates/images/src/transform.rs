use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tracing::trace;

/// Brings any decoded image into a pixel layout the WebP encoder is happy with.
///
/// 8-bit RGB and 8-bit grayscale pass through untouched, everything else (palettes already
/// expanded by the decoder, alpha channels, 16-bit and float buffers) is flattened to 8-bit RGB.
#[must_use]
pub fn normalize(img: DynamicImage) -> DynamicImage {
	match img {
		DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
		other => {
			trace!(color = ?other.color(), "Converting image to 8-bit RGB");
			DynamicImage::ImageRgb8(other.to_rgb8())
		}
	}
}

/// Width and height after capping the width at `max_width`, keeping the aspect ratio.
///
/// Height is rounded down and never goes below a single pixel. Images that already fit are
/// returned as is, we never upscale.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
	if width <= max_width {
		return (width, height);
	}

	let scaled = u64::from(height) * u64::from(max_width) / u64::from(width);

	// `scaled` <= `height` because `max_width` < `width`
	(max_width, u32::try_from(scaled).map_or(height, |h| h.max(1)))
}

/// Downscales `img` with a Lanczos filter so its width is at most `max_width`.
#[must_use]
pub fn scale_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
	let (width, height) = img.dimensions();
	let (new_width, new_height) = scaled_dimensions(width, height, max_width);

	if (new_width, new_height) == (width, height) {
		return img;
	}

	trace!(width, height, new_width, new_height, "Resizing image");
	img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
