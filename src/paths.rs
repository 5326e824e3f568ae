//! Resolution of relative defect paths against declared source roots.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::SchemaError;

/// Resolve a defect's relative source path to a full path.
///
/// The declared directories are searched in order and the first match wins.
/// A directory matches when its trailing path segment equals the first
/// segment of the relative path; the match must be exact segment equality,
/// so a declared `.../absrc` never captures a relative path starting with
/// `src`. On a match, the first segment is replaced by the full declared
/// directory and the remaining segments are joined onto it.
pub fn resolve_source_path(relative: &str, source_dirs: &[String]) -> Result<String, SchemaError> {
    let mut segments = relative.split(MAIN_SEPARATOR);
    let first = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.collect();

    for dir in source_dirs {
        if trailing_segment(dir) == Some(first) {
            let mut resolved = PathBuf::from(dir);
            for segment in &rest {
                resolved.push(segment);
            }
            return Ok(resolved.to_string_lossy().into_owned());
        }
    }

    Err(SchemaError::UnresolvedSourcePath {
        path: relative.to_string(),
    })
}

fn trailing_segment(dir: &str) -> Option<&str> {
    Path::new(dir).file_name().and_then(|name| name.to_str())
}
