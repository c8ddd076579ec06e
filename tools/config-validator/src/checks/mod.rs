pub mod env_file;
pub mod firebase;
pub mod required_files;

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Everything one check had to say, in the order it said it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub findings: Vec<Finding>,
}

impl CheckResult {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            findings: Vec::new(),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.findings.push(Finding { severity, message });
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}

/// Accumulated results of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub project_root: PathBuf,
    pub checks: Vec<CheckResult>,
}

impl Report {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            checks: Vec::new(),
        }
    }

    pub fn push(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    pub fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.checks
            .iter()
            .flat_map(|c| c.findings.iter())
            .filter(move |f| f.severity == severity)
            .map(|f| f.message.as_str())
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages(Severity::Info).collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warning).collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error).collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.checks.iter().map(|c| c.count(severity)).sum()
    }

    pub fn total(&self) -> usize {
        self.checks.iter().map(|c| c.findings.len()).sum()
    }

    /// Share of info findings among all findings, as a percentage.
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(Severity::Info) as f64 / total as f64 * 100.0
    }

    /// Warnings never fail a run.
    pub fn passed(&self) -> bool {
        self.count(Severity::Error) == 0
    }
}
