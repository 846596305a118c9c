mod cli;

use cli::Args;
use license_check::adapters::outbound::console::StderrProgressReporter;
use license_check::adapters::outbound::filesystem::FileSystemReader;
use license_check::adapters::outbound::network::ValidationServerClient;
use license_check::application::dto::LicenseCheckRequest;
use license_check::application::use_cases::ValidateLicensesUseCase;
use license_check::config::{discover_config, load_config_from_path, ResolvedConfig};
use license_check::ports::inbound::LicenseValidationPort;
use license_check::shared::error::{ExitCode, LicenseCheckError};
use license_check::shared::security::validate_not_symlink;
use license_check::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    // Explicit --config must exist; otherwise discover one next to the project
    let config_file = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(&project_path)?,
    };
    let config = ResolvedConfig::resolve(args.overrides(), config_file, &project_path)?;

    // Create adapters (Dependency Injection)
    let dependency_reader = FileSystemReader::new();
    let license_repository =
        ValidationServerClient::new(config.host.clone(), config.notification_email.clone());
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        ValidateLicensesUseCase::new(dependency_reader, license_repository, progress_reporter);

    let request = LicenseCheckRequest::new(
        config.dependencies_path,
        config.offline,
        config.failure_policy,
    );

    let outcome = use_case.validate(request)?;
    outcome.ensure_success()?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    validate_not_symlink(path, "project").map_err(|e| LicenseCheckError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !path.is_dir() {
        return Err(LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("dependencies.txt");
        fs::write(&file_path, "junit:junit:4.11").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }
}
