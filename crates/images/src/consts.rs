/// Raster formats we decode through the generic `image` crate path.
pub const GENERIC_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// The maximum file size that an image can be in order to have a thumbnail generated.
///
/// This value is in MiB.
pub const GENERIC_MAXIMUM_FILE_SIZE: u64 = MIB * 256;

/// libwebp's slowest and best compression method.
pub const MAX_WEBP_METHOD: u8 = 6;

/// The size of 1MiB in bytes
const MIB: u64 = 1_048_576;
