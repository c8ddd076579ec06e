use crate::checks::CheckResult;
use crate::config::{self, ValidatorConfig};
use crate::error::{self, ValidatorError};
use serde_json::Value;

pub fn check(config: &ValidatorConfig) -> CheckResult {
    let mut result = CheckResult::new("Firebase configuration");
    tracing::debug!("checking {}", config::GOOGLE_SERVICES);

    if !config.exists(config::GOOGLE_SERVICES) {
        if config.exists(config::GOOGLE_SERVICES_TEMPLATE) {
            result.warning(
                "No google-services.json found. Copy template and configure with your Firebase project.",
            );
        } else {
            result.warning("No Firebase configuration found!");
        }
        return result;
    }

    result.info("\u{2713} google-services.json found");

    let document = match error::read_json(&config.resolve(config::GOOGLE_SERVICES)) {
        Ok(v) => v,
        Err(e @ ValidatorError::Json { .. }) => {
            tracing::debug!(error = ?e, "google-services.json failed to parse");
            result.error("google-services.json is not valid JSON");
            return result;
        }
        Err(e) => {
            tracing::debug!(error = ?e, "google-services.json unreadable");
            result.warning(format!("Could not validate google-services.json: {e}"));
            return result;
        }
    };

    let project_info = document.get("project_info");
    let client = document.get("client");
    let (Some(project_info), Some(_)) = (project_info, client) else {
        result.warning("google-services.json has invalid structure");
        return result;
    };

    if !project_info.is_object() {
        result.warning(format!(
            "Could not validate google-services.json: project_info is {}, expected an object",
            json_kind(project_info)
        ));
        return result;
    }

    match project_id(project_info) {
        Some(id) => result.info(format!("\u{2713} Firebase project ID: {id}")),
        None => result.warning("Firebase project_id appears to be a placeholder"),
    }

    result
}

/// The configured project id, unless it is unset, falsy (`null`, `false`, `0`,
/// empty) or still the template default. Non-string ids render as JSON text.
fn project_id(project_info: &Value) -> Option<String> {
    let id = match project_info.get("project_id")? {
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::String(s) => s.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Array(a) if a.is_empty() => return None,
        Value::Object(o) if o.is_empty() => return None,
        other => other.to_string(),
    };
    (id != config::DEFAULT_FIREBASE_PROJECT_ID).then_some(id)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
