pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("error while loading the image (via the `image` crate): {0}")]
	Image(#[from] image::ImageError),
	#[error("there was an i/o error: {0}")]
	Io(#[from] std::io::Error),
	#[error("the image provided is unsupported")]
	Unsupported,
	#[error("the image provided is too large (over {0} bytes)")]
	TooLarge(u64),
	#[error("invalid path provided (it had no file extension)")]
	NoExtension,
	#[error("webp quality must be within [0.0, 100.0], received: {0}")]
	InvalidQuality(f32),
	#[error("webp method must be within [0, 6], received: {0}")]
	InvalidMethod(u8),
	#[error("failed to set up the webp encoder: {0}")]
	WebpEncoder(String),
	#[error("failed to encode webp: {0}")]
	WebpEncode(String),
}
