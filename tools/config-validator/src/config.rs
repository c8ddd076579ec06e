use std::path::{Path, PathBuf};

pub const ENV_FILE: &str = ".env";
pub const ENV_TEMPLATE: &str = ".env.template";

/// Keys that must be set in `.env` for a production build.
pub const REQUIRED_ENV_VARS: &[&str] = &[
    "API_BASE_URL_PROD",
    "MAPBOX_ACCESS_TOKEN_PROD",
    "FIREBASE_PROJECT_ID_PROD",
];

/// Values that mean "someone copied the template and never filled it in".
/// Matched exactly, no trimming or case folding.
pub const PLACEHOLDER_VALUES: &[&str] = &["", "your_placeholder_value", "placeholder"];

pub const GOOGLE_SERVICES: &str = "app/google-services.json";
pub const GOOGLE_SERVICES_TEMPLATE: &str = "app/google-services.json.template";

/// Project id shipped in the template's google-services.json.
pub const DEFAULT_FIREBASE_PROJECT_ID: &str = "aalay-student-housing";

pub const BUILD_FILES: &[&str] = &[
    "build.gradle",
    "app/build.gradle",
    "settings.gradle",
    "gradle.properties",
    "env-loader.gradle",
];

pub const SECURITY_FILES: &[&str] = &[
    "app/src/main/res/xml/network_security_config.xml",
    "app/src/main/res/xml/backup_rules.xml",
    "app/src/main/res/xml/data_extraction_rules.xml",
    "app/proguard-rules.pro",
];

pub const SOURCE_FILES: &[&str] = &[
    "utils/ConfigManager.kt",
    "utils/SecurityConfig.kt",
    "di/NetworkModule.kt",
    "AalayApplication.kt",
];

pub const DOC_FILES: &[&str] = &["README.md", "DEPLOYMENT.md", ".gitignore"];

pub const CI_FILES: &[&str] = &[".github/workflows/android-ci.yml"];

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub root_dir: PathBuf,
}

impl ValidatorConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
        }
    }

    /// Use the working directory as the project root.
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::from_root(&std::env::current_dir()?))
    }

    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        self.root_dir.join(rel_path)
    }

    pub fn exists(&self, rel_path: &str) -> bool {
        let path = self.resolve(rel_path);
        let found = path.exists();
        tracing::debug!(path = %path.display(), found, "probed");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_relative_paths_onto_root() {
        let config = ValidatorConfig::from_root(Path::new("/tmp/project"));
        assert_eq!(
            config.resolve("app/build.gradle"),
            PathBuf::from("/tmp/project/app/build.gradle")
        );
    }

    #[test]
    fn exists_reports_false_for_missing_paths() {
        let root = tempfile::tempdir().unwrap();
        let config = ValidatorConfig::from_root(root.path());
        assert!(!config.exists("build.gradle"));

        std::fs::write(root.path().join("build.gradle"), "").unwrap();
        assert!(config.exists("build.gradle"));
    }

    #[test]
    fn placeholder_list_includes_empty_string() {
        assert!(PLACEHOLDER_VALUES.contains(&""));
    }
}
