use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wt_thumbnailer::{
	run, RunReport, ThumbnailerBuilder, DEFAULT_LOGO_MARKER, DEFAULT_MAX_WIDTH, DEFAULT_ROOT,
};

const ROOT: &str = DEFAULT_ROOT;
const MAX_WIDTH: u32 = DEFAULT_MAX_WIDTH;
const WEBP_QUALITY: f32 = 70.0;
const WEBP_METHOD: u8 = 6;

fn main() -> anyhow::Result<()> {
	// Use info level by default, can be overridden with RUST_LOG
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_target(false)
		.init();

	let config = ThumbnailerBuilder::new()
		.root(ROOT)
		.logo_marker(DEFAULT_LOGO_MARKER)
		.max_width(MAX_WIDTH)
		.and_then(|builder| builder.quality(WEBP_QUALITY))
		.and_then(|builder| builder.method(WEBP_METHOD))
		.context("invalid thumbnail settings")?
		.build();

	match run(&config) {
		RunReport::RootMissing(root) => {
			debug!("Nothing to do, {} is missing", root.display());
		}
		RunReport::Finished(summary) => {
			debug!(?summary, "Thumbnail run complete");
		}
	}

	Ok(())
}
