//! Local-file alternative to the HTTP fetch.

use std::path::Path;

use tracing::debug;

use super::SourceError;

const YAML_MIME_TYPES: [&str; 2] = ["text/yaml", "application/x-yaml"];

/// Whether a file name (and optional MIME type) looks like a YAML scores
/// document.
pub fn is_yaml_source(name: &str, mime: Option<&str>) -> bool {
    if let Some(mime) = mime {
        if YAML_MIME_TYPES.contains(&mime) {
            return true;
        }
    }
    name.ends_with(".yaml") || name.ends_with(".yml")
}

/// Read a local scores file as text.
///
/// Files that don't look like YAML are ignored rather than treated as an
/// error: `Ok(None)` means "not a scores document". I/O failures on a
/// recognized file are still surfaced.
pub fn read_scores_file(path: &Path) -> Result<Option<String>, SourceError> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if !is_yaml_source(name, None) {
        debug!("ignoring non-YAML file {:?}", path);
        return Ok(None);
    }

    let text = std::fs::read_to_string(path)?;
    Ok(Some(text))
}
