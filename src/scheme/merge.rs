//! Merging default schemes into a target document

use crate::error::{json_kind, SetupError, SetupResult};
use crate::scheme::Document;
use crate::sort::{sort_array_by_property, sort_object_keys};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// What to do when a default scheme's name already exists in the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Leave the user's scheme alone.
    #[default]
    KeepExisting,
    /// Replace the user's scheme with the default, keeping its position.
    Overwrite,
}

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    pub policy: MergePolicy,
    /// Sort the merged collection by scheme name.
    pub sort_schemes: bool,
    /// Sort keys of every object in the written document.
    pub sort_keys: bool,
    /// Render the result without writing it back.
    pub dry_run: bool,
}

/// Scheme names grouped by what the merge did with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub replaced: Vec<String>,
    pub skipped: Vec<String>,
}

impl MergeReport {
    /// True when the target's schemes were modified.
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.replaced.is_empty()
    }
}

/// Merge the `schemes` collection of `defaults` into `target` in memory.
///
/// Both collections must have the same shape: a list of objects with a string
/// `name`, or a mapping keyed by name. `target` is left untouched on error.
pub fn merge_documents(
    defaults: &Document,
    target: &mut Document,
    options: &MergeOptions,
) -> SetupResult<MergeReport> {
    let source = schemes_of(&defaults.value, &defaults.path)?;
    let dest = schemes_mut(&mut target.value, &target.path)?;

    let mut report = MergeReport::default();
    match (source, dest) {
        (Value::Array(src), Value::Array(dst)) => {
            merge_lists(src, dst, &defaults.path, &target.path, options.policy, &mut report)?;
            if options.sort_schemes {
                sort_array_by_property(dst.as_mut_slice(), "name");
            }
        }
        (Value::Object(src), Value::Object(dst)) => {
            merge_maps(src, dst, options.policy, &mut report);
            if options.sort_schemes {
                *dst = sort_object_keys(dst);
            }
        }
        (src, dst) => {
            return Err(SetupError::ShapeMismatch {
                defaults: json_kind(src),
                target: json_kind(dst),
            })
        }
    }

    tracing::info!(
        "Merged schemes into {}: {} added, {} replaced, {} skipped",
        target.path.display(),
        report.added.len(),
        report.replaced.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn schemes_of<'a>(value: &'a Value, path: &Path) -> SetupResult<&'a Value> {
    let schemes =
        value.get("schemes").ok_or_else(|| SetupError::MissingSchemes { path: path.to_path_buf() })?;
    check_collection(schemes, path)?;
    Ok(schemes)
}

fn schemes_mut<'a>(value: &'a mut Value, path: &Path) -> SetupResult<&'a mut Value> {
    let schemes = value
        .get_mut("schemes")
        .ok_or_else(|| SetupError::MissingSchemes { path: path.to_path_buf() })?;
    check_collection(schemes, path)?;
    Ok(schemes)
}

fn check_collection(schemes: &Value, path: &Path) -> SetupResult<()> {
    match schemes {
        Value::Array(_) | Value::Object(_) => Ok(()),
        other => Err(SetupError::InvalidSchemes { path: path.to_path_buf(), found: json_kind(other) }),
    }
}

fn scheme_name(scheme: &Value) -> Option<&str> {
    scheme.get("name").and_then(Value::as_str)
}

fn merge_lists(
    src: &[Value],
    dst: &mut Vec<Value>,
    src_path: &Path,
    dst_path: &Path,
    policy: MergePolicy,
    report: &mut MergeReport,
) -> SetupResult<()> {
    // Validate both sides before touching the target.
    let incoming = src
        .iter()
        .enumerate()
        .map(|(index, scheme)| {
            scheme_name(scheme)
                .map(|name| (name.to_string(), scheme))
                .ok_or_else(|| SetupError::UnnamedScheme { path: src_path.to_path_buf(), index })
        })
        .collect::<SetupResult<Vec<_>>>()?;

    let mut positions: HashMap<String, usize> = HashMap::with_capacity(dst.len());
    for (index, scheme) in dst.iter().enumerate() {
        let name = scheme_name(scheme)
            .ok_or_else(|| SetupError::UnnamedScheme { path: dst_path.to_path_buf(), index })?;
        positions.entry(name.to_string()).or_insert(index);
    }

    for (name, scheme) in incoming {
        match positions.get(&name) {
            Some(&index) => match policy {
                MergePolicy::KeepExisting => {
                    tracing::debug!("Keeping existing scheme '{}'", name);
                    report.skipped.push(name);
                }
                MergePolicy::Overwrite => {
                    tracing::warn!("Overwriting existing scheme '{}'", name);
                    dst[index] = scheme.clone();
                    report.replaced.push(name);
                }
            },
            None => {
                tracing::debug!("Adding scheme '{}'", name);
                positions.insert(name.clone(), dst.len());
                dst.push(scheme.clone());
                report.added.push(name);
            }
        }
    }
    Ok(())
}

fn merge_maps(
    src: &Map<String, Value>,
    dst: &mut Map<String, Value>,
    policy: MergePolicy,
    report: &mut MergeReport,
) {
    for (name, scheme) in src {
        if dst.contains_key(name) {
            match policy {
                MergePolicy::KeepExisting => {
                    tracing::debug!("Keeping existing scheme '{}'", name);
                    report.skipped.push(name.clone());
                }
                MergePolicy::Overwrite => {
                    tracing::warn!("Overwriting existing scheme '{}'", name);
                    // Insert on an existing key keeps its position.
                    dst.insert(name.clone(), scheme.clone());
                    report.replaced.push(name.clone());
                }
            }
        } else {
            tracing::debug!("Adding scheme '{}'", name);
            dst.insert(name.clone(), scheme.clone());
            report.added.push(name.clone());
        }
    }
}
