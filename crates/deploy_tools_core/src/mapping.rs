use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::ConfigurationError;

pub const DEFAULT_MAPPING_FILE: &str = ".github/lambda-ecr-mapping.txt";

const COMMENT_PREFIX: char = '#';
const SEPARATOR: char = ':';

/// One `folder:repository-name` line of the mapping file.
///
/// `folder` is informational only and is never checked against the
/// filesystem.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MappingEntry {
    pub folder: String,
    pub repository_name: String,
}

impl MappingEntry {
    pub fn new(folder: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            repository_name: repository_name.into(),
        }
    }
}

pub fn parse_mapping(path: &Path) -> Result<Vec<MappingEntry>, ConfigurationError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigurationError::MappingFileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigurationError::MappingFileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(parse_mapping_str(&text))
}

/// Parses mapping text, keeping file order and duplicates.
///
/// Blank lines, `#` comments, lines without a `:` and lines with an empty
/// half are skipped silently. Only the first `:` separates the fields.
pub fn parse_mapping_str(text: &str) -> Vec<MappingEntry> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(raw: &str) -> Option<MappingEntry> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let (folder, repository_name) = line.split_once(SEPARATOR)?;
    let folder = folder.trim();
    let repository_name = repository_name.trim();
    if folder.is_empty() || repository_name.is_empty() {
        return None;
    }

    Some(MappingEntry::new(folder, repository_name))
}
