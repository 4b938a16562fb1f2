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

mod config;
mod error;
mod generate;
mod path;
mod run;

pub use config::{
	ThumbnailerBuilder, ThumbnailerConfig, DEFAULT_LOGO_MARKER, DEFAULT_MAX_WIDTH, DEFAULT_ROOT,
};
pub use error::{Error, FileIOError};
pub use generate::{generate, Outcome};
pub use path::{
	classify, has_accepted_extension, is_logo, thumbnail_path, Classification, THUMBNAIL_SUFFIX,
};
pub use run::{run, RunReport, Summary};
