use crate::license_validation::domain::DependencyCoordinate;
use crate::ports::outbound::DependencyReader;
use crate::shared::error::LicenseCheckError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// Default name of the dependency list inside a project directory
pub const DEPENDENCIES_FILENAME: &str = "dependencies.txt";

/// FileSystemReader adapter for reading dependency lists from disk
///
/// Accepts one dependency per line, either as `groupId:artifactId:version` or as
/// printed by `mvn dependency:list`
/// (`groupId:artifactId:type[:classifier]:version:scope`, optionally behind an
/// `[INFO]` prefix). Blank lines, `#` comments and Maven's heading lines are skipped.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyReader for FileSystemReader {
    fn read_dependencies(&self, source: &Path) -> Result<Vec<DependencyCoordinate>> {
        if !source.exists() {
            return Err(LicenseCheckError::DependencyFileNotFound {
                path: source.to_path_buf(),
                suggestion: format!(
                    "Generate it with `mvn dependency:list -DoutputFile={}`,\n   \
                     or point to an existing list with the --dependencies option.",
                    DEPENDENCIES_FILENAME
                ),
            }
            .into());
        }

        let content = read_regular_file(source, "dependency list").map_err(|e| {
            LicenseCheckError::FileReadError {
                path: source.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        parse_dependency_list(&content).map_err(|(line, details)| {
            LicenseCheckError::DependencyParseError {
                path: source.to_path_buf(),
                line,
                details,
            }
            .into()
        })
    }
}

/// Parses a dependency list, de-duplicating while keeping first-seen order
///
/// Errors carry the 1-based line number and a description.
pub fn parse_dependency_list(
    content: &str,
) -> std::result::Result<Vec<DependencyCoordinate>, (usize, String)> {
    let mut seen = HashSet::new();
    let mut coordinates = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        let line = line.strip_prefix("[INFO]").unwrap_or(line).trim();

        if is_ignorable(line) {
            continue;
        }

        let coordinate = parse_entry(line).map_err(|e| (idx + 1, e.to_string()))?;
        if seen.insert(coordinate.to_string()) {
            coordinates.push(coordinate);
        }
    }

    Ok(coordinates)
}

const MAVEN_SCOPES: [&str; 6] = ["compile", "provided", "runtime", "test", "system", "import"];

fn is_ignorable(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('#')
        || line.ends_with(':') // "The following files have been resolved:"
        || line == "none"
}

fn parse_entry(line: &str) -> Result<DependencyCoordinate> {
    // Drops Maven suffixes such as " (optional)" and " -- module foo"
    let entry = line.split_whitespace().next().unwrap_or_default();
    let fields: Vec<&str> = entry.split(':').collect();

    match fields.as_slice() {
        [group_id, artifact_id, version] => DependencyCoordinate::new(group_id, artifact_id, version),
        // -DoutputScope=false
        [group_id, artifact_id, _type, version] => {
            DependencyCoordinate::new(group_id, artifact_id, version)
        }
        [group_id, artifact_id, _type, version, scope] if is_maven_scope(scope) => {
            DependencyCoordinate::new(group_id, artifact_id, version)
        }
        // Classifier without a scope column
        [group_id, artifact_id, _type, _classifier, version] => {
            DependencyCoordinate::new(group_id, artifact_id, version)
        }
        [group_id, artifact_id, _type, _classifier, version, scope] if is_maven_scope(scope) => {
            DependencyCoordinate::new(group_id, artifact_id, version)
        }
        _ => anyhow::bail!(
            "'{}' is not groupId:artifactId:version or groupId:artifactId:type[:classifier]:version[:scope]",
            entry
        ),
    }
}

fn is_maven_scope(field: &str) -> bool {
    MAVEN_SCOPES.contains(&field)
}
