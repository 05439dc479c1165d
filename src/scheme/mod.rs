//! Merging bundled color schemes into terminal settings
//!
//! Loads a defaults document and the user's settings (both relaxed JSON),
//! adds the default schemes the user does not have yet, and writes the result
//! back as strict JSON. Nothing is written unless every step succeeds.

use crate::error::SetupResult;
use std::path::Path;

pub mod document;
pub mod merge;

pub use document::{Document, BUNDLED_LABEL, BUNDLED_SETTINGS};
pub use merge::{merge_documents, MergeOptions, MergePolicy, MergeReport};

/// Result of a merge run.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub report: MergeReport,
    /// The merged document as it was (or would have been) written.
    pub rendered: String,
    /// Whether the target file was rewritten.
    pub written: bool,
}

/// Merge the schemes of `defaults_path` into `target_path` using default options.
pub fn merge_schemes(defaults_path: &Path, target_path: &Path) -> SetupResult<MergeReport> {
    merge_schemes_with(defaults_path, target_path, &MergeOptions::default())
        .map(|outcome| outcome.report)
}

/// Merge the schemes of `defaults_path` into `target_path`.
pub fn merge_schemes_with(
    defaults_path: &Path,
    target_path: &Path,
    options: &MergeOptions,
) -> SetupResult<MergeOutcome> {
    let defaults = Document::load(defaults_path)?;
    merge_into(&defaults, target_path, options)
}

/// Merge an already loaded defaults document into `target_path`.
///
/// The target is rewritten only when the merge changed something or a sort
/// was requested, so a no-op run keeps the user's comments intact.
pub fn merge_into(
    defaults: &Document,
    target_path: &Path,
    options: &MergeOptions,
) -> SetupResult<MergeOutcome> {
    let mut target = Document::load(target_path)?;
    let report = merge_documents(defaults, &mut target, options)?;
    let rendered = target.render(options.sort_keys)?;

    let needs_write = report.changed() || options.sort_schemes || options.sort_keys;
    let written = needs_write && !options.dry_run;
    if written {
        target.write(&rendered)?;
    } else {
        tracing::debug!(
            "Leaving {} untouched (dry run: {}, changed: {})",
            target_path.display(),
            options.dry_run,
            needs_write
        );
    }

    Ok(MergeOutcome { report, rendered, written })
}
