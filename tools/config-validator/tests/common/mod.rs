#![allow(dead_code)]

use std::fs;
use std::path::Path;

use config_validator::config;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub const GOOD_ENV: &str = "\
# production
API_BASE_URL_PROD=https://api.aalay.example
MAPBOX_ACCESS_TOKEN_PROD=pk.eyJ1IjoiYWFsYXkifQ
FIREBASE_PROJECT_ID_PROD=aalay-prod
";

pub const GOOD_GOOGLE_SERVICES: &str = r#"{
  "project_info": { "project_number": "1234", "project_id": "aalay-prod" },
  "client": [ { "client_info": { "mobilesdk_app_id": "1:1234:android:abcd" } } ]
}"#;

/// Lay down every file the validator looks for, with good contents.
pub fn populate_project(root: &Path) {
    write_file(&root.join(config::ENV_FILE), GOOD_ENV);
    write_file(&root.join(config::GOOGLE_SERVICES), GOOD_GOOGLE_SERVICES);

    for rel in config::BUILD_FILES
        .iter()
        .chain(config::SECURITY_FILES)
        .chain(config::SOURCE_FILES)
        .chain(config::DOC_FILES)
        .chain(config::CI_FILES)
    {
        write_file(&root.join(rel), "");
    }
}
