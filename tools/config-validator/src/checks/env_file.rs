use crate::checks::CheckResult;
use crate::config::{self, ValidatorConfig};
use crate::env_file::EnvVarMap;
use crate::error;

pub fn check(config: &ValidatorConfig) -> CheckResult {
    let mut result = CheckResult::new("Environment file");
    tracing::debug!("checking {}", config::ENV_FILE);

    if !config.exists(config::ENV_FILE) {
        if config.exists(config::ENV_TEMPLATE) {
            result.warning(
                "No .env file found. Copy .env.template to .env and fill in your values.",
            );
        } else {
            result.error("Neither .env nor .env.template file found!");
        }
        return result;
    }

    result.info("\u{2713} .env file found");

    let content = match error::read_to_string(&config.resolve(config::ENV_FILE)) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = ?e, "failed to read .env");
            result.error(format!("Error reading .env file: {e}"));
            return result;
        }
    };
    let vars = EnvVarMap::parse(&content);

    for var in config::REQUIRED_ENV_VARS {
        match vars.get(var) {
            None => result.warning(format!("Required variable {var} not found in .env")),
            Some(value) if config::PLACEHOLDER_VALUES.contains(&value) => {
                result.warning(format!("Variable {var} has placeholder value"))
            }
            Some(_) => {}
        }
    }

    result.info(format!("\u{2713} Found {} environment variables", vars.len()));
    result
}
