pub mod checks;
pub mod config;
pub mod env_file;
pub mod error;
pub mod reporter;

use checks::{CheckResult, Report};
use config::ValidatorConfig;

/// Run every check in report order. No check can stop the ones after it.
pub fn run_all_checks(config: &ValidatorConfig) -> Report {
    type CheckFn = fn(&ValidatorConfig) -> CheckResult;
    let check_fns: Vec<CheckFn> = vec![
        checks::env_file::check,
        checks::firebase::check,
        checks::required_files::build_files,
        checks::required_files::security_files,
        checks::required_files::source_files,
        checks::required_files::documentation,
        checks::required_files::ci_cd,
    ];

    let mut report = Report::new(config.root_dir.clone());
    for check_fn in &check_fns {
        let result = check_fn(config);
        tracing::debug!(check = %result.name, findings = result.findings.len(), "check finished");
        report.push(result);
    }

    report
}
