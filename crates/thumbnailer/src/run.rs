use crate::{classify, generate, Classification, Outcome, ThumbnailerConfig};

use std::{fmt, path::PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

/// Counts per outcome for one run. `files_found` is every accepted image, whatever happened to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	pub files_found: usize,
	pub created: usize,
	pub skipped_logo: usize,
	pub skipped_existing: usize,
	pub failed: usize,
}

impl Summary {
	pub fn record(&mut self, outcome: &Outcome) {
		self.files_found += 1;
		match outcome {
			Outcome::SkippedLogo(_) => self.skipped_logo += 1,
			Outcome::SkippedExisting(_) => self.skipped_existing += 1,
			Outcome::Failed { .. } => self.failed += 1,
			Outcome::Created(_) => self.created += 1,
		}
	}
}

impl fmt::Display for Summary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Processed {} image(s): {} created, {} already existed, {} logo(s) skipped, {} failed",
			self.files_found, self.created, self.skipped_existing, self.skipped_logo, self.failed
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
	/// The configured root wasn't there, nothing was touched
	RootMissing(PathBuf),
	Finished(Summary),
}

impl RunReport {
	#[must_use]
	pub const fn summary(&self) -> Option<&Summary> {
		match self {
			Self::RootMissing(_) => None,
			Self::Finished(summary) => Some(summary),
		}
	}

	#[must_use]
	pub const fn files_found(&self) -> usize {
		match self {
			Self::RootMissing(_) => 0,
			Self::Finished(summary) => summary.files_found,
		}
	}
}

/// Walks the configured root and runs [`generate`] on every accepted image below it, one at a time.
pub fn run(config: &ThumbnailerConfig) -> RunReport {
	let root = config.root();

	if !root.exists() {
		warn!("Root folder does not exist: {}", root.display());
		return RunReport::RootMissing(root.to_path_buf());
	}

	let mut summary = Summary::default();

	for entry in WalkDir::new(root) {
		// extract directory entry or log and continue if failed
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				warn!("Error reading directory entry: {e}");
				continue;
			}
		};
		let path = entry.path();

		if classify(path, config) == Classification::Ignored || !path.is_file() {
			continue;
		}

		summary.record(&generate(path, config));
	}

	info!("Done. {summary}");

	RunReport::Finished(summary)
}
