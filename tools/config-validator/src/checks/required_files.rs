use crate::checks::{CheckResult, Severity};
use crate::config::{self, ValidatorConfig};

/// A fixed set of paths that should exist, and how bad it is when one doesn't.
struct FileList {
    name: &'static str,
    paths: &'static [&'static str],
    missing: Severity,
    missing_label: &'static str,
}

static BUILD: FileList = FileList {
    name: "Build files",
    paths: config::BUILD_FILES,
    missing: Severity::Error,
    missing_label: "Required build file missing",
};

static SECURITY: FileList = FileList {
    name: "Security files",
    paths: config::SECURITY_FILES,
    missing: Severity::Warning,
    missing_label: "Security file missing",
};

static SOURCES: FileList = FileList {
    name: "Source files",
    paths: config::SOURCE_FILES,
    missing: Severity::Error,
    missing_label: "Critical source file missing",
};

static DOCS: FileList = FileList {
    name: "Documentation",
    paths: config::DOC_FILES,
    missing: Severity::Warning,
    missing_label: "Documentation file missing",
};

static CI: FileList = FileList {
    name: "CI/CD",
    paths: config::CI_FILES,
    missing: Severity::Warning,
    missing_label: "CI/CD file missing",
};

fn check_list(list: &FileList, config: &ValidatorConfig) -> CheckResult {
    let mut result = CheckResult::new(list.name);
    tracing::debug!("checking {}", list.name);

    for path in list.paths {
        if config.exists(path) {
            result.info(format!("\u{2713} {path} found"));
            continue;
        }
        let message = format!("{}: {path}", list.missing_label);
        match list.missing {
            Severity::Error => result.error(message),
            Severity::Warning => result.warning(message),
            Severity::Info => result.info(message),
        }
    }

    result
}

pub fn build_files(config: &ValidatorConfig) -> CheckResult {
    check_list(&BUILD, config)
}

pub fn security_files(config: &ValidatorConfig) -> CheckResult {
    check_list(&SECURITY, config)
}

pub fn source_files(config: &ValidatorConfig) -> CheckResult {
    check_list(&SOURCES, config)
}

pub fn documentation(config: &ValidatorConfig) -> CheckResult {
    check_list(&DOCS, config)
}

pub fn ci_cd(config: &ValidatorConfig) -> CheckResult {
    check_list(&CI, config)
}
