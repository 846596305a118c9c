use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length for group and artifact ids (security limit)
const MAX_ID_LENGTH: usize = 255;

/// Maximum length for versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Timestamped snapshot versions as deployed to a Maven repository,
/// e.g. `1.0-20130101.123456-7`.
static SNAPSHOT_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)-([0-9]{8}\.[0-9]{6})-([0-9]+)$").expect("snapshot pattern is valid")
});

/// DependencyCoordinate value object: the `groupId:artifactId:version` triple
///
/// The version is stored as its base version, so a resolved timestamped
/// snapshot is checked under the same key as `-SNAPSHOT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyCoordinate {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl DependencyCoordinate {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Result<Self> {
        validate_part(group_id, "Group id", MAX_ID_LENGTH)?;
        validate_part(artifact_id, "Artifact id", MAX_ID_LENGTH)?;
        validate_part(version, "Version", MAX_VERSION_LENGTH)?;

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: base_version(version),
        })
    }

    /// Parses the `groupId:artifactId:version` form
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.trim().split(':').collect();
        match parts.as_slice() {
            [group_id, artifact_id, version] => Self::new(group_id, artifact_id, version),
            _ => anyhow::bail!(
                "Invalid dependency coordinate '{}': expected groupId:artifactId:version",
                text.trim()
            ),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Collapses a timestamped snapshot version to `<prefix>-SNAPSHOT`.
pub fn base_version(version: &str) -> String {
    match SNAPSHOT_TIMESTAMP.captures(version) {
        Some(caps) => format!("{}-SNAPSHOT", &caps[1]),
        None => version.to_string(),
    }
}

fn validate_part(value: &str, part_name: &str, max_length: usize) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", part_name);
    }

    if value.len() > max_length {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            part_name,
            value.len(),
            max_length
        );
    }

    // Coordinates are concatenated into the request URL verbatim
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'))
    {
        anyhow::bail!(
            "{} '{}' contains invalid characters. Only alphanumeric, dots, hyphens, underscores, and plus are allowed.",
            part_name,
            value
        );
    }

    Ok(())
}
