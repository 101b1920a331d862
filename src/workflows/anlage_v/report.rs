use super::form::FieldCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Kritischer Fehler",
            Self::Warning => "Warnung",
            Self::Info => "Hinweis",
        }
    }
}

/// One diagnostic produced by a plausibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldCode>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: None,
            message: message.into(),
            expected: None,
            actual: None,
            detail: None,
            impact: None,
            fix: None,
            action: None,
            hint: None,
        }
    }

    pub fn critical(field: FieldCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message).on(field)
    }

    pub fn warning(field: FieldCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message).on(field)
    }

    pub fn info(field: FieldCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message).on(field)
    }

    pub fn on(mut self, field: FieldCode) -> Self {
        self.field = Some(field);
        self
    }

    pub fn expected(mut self, value: f64) -> Self {
        self.expected = Some(value);
        self
    }

    pub fn actual(mut self, value: f64) -> Self {
        self.actual = Some(value);
        self
    }

    pub fn detail(mut self, text: impl Into<String>) -> Self {
        self.detail = Some(text.into());
        self
    }

    pub fn impact(mut self, text: impl Into<String>) -> Self {
        self.impact = Some(text.into());
        self
    }

    pub fn fix(mut self, text: impl Into<String>) -> Self {
        self.fix = Some(text.into());
        self
    }

    pub fn action(mut self, text: impl Into<String>) -> Self {
        self.action = Some(text.into());
        self
    }

    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Invalid,
}

impl ValidationStatus {
    pub fn from_counts(critical: usize, warnings: usize) -> Self {
        if critical > 0 {
            Self::Invalid
        } else if warnings > 0 {
            Self::Warning
        } else {
            Self::Valid
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Invalid => "invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub critical_errors: usize,
    pub warnings: usize,
    pub hints: usize,
}

/// Outcome of a validation run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    critical: Vec<Finding>,
    warnings: Vec<Finding>,
    hints: Vec<Finding>,
    status: ValidationStatus,
    validated_at: DateTime<Utc>,
}

impl ValidationReport {
    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn can_submit(&self) -> bool {
        self.critical.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.critical.is_empty()
    }

    pub fn critical(&self) -> &[Finding] {
        &self.critical
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn hints(&self) -> &[Finding] {
        &self.hints
    }

    pub fn validated_at(&self) -> DateTime<Utc> {
        self.validated_at
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            critical_errors: self.critical.len(),
            warnings: self.warnings.len(),
            hints: self.hints.len(),
        }
    }

    /// Wire representation returned by the validation endpoint.
    pub fn response(&self) -> ValidationResponse {
        ValidationResponse {
            success: true,
            validation: ValidationOverview {
                status: self.status,
                is_valid: self.is_valid(),
                can_submit: self.can_submit(),
                summary: self.summary(),
            },
            kritische_fehler: self.critical.clone(),
            warnungen: self.warnings.clone(),
            hinweise: self.hints.clone(),
            validated_at: self.validated_at,
        }
    }
}

/// Append-only accumulator; findings keep the order in which checks ran.
#[derive(Debug, Default)]
pub(crate) struct FindingsBuilder {
    critical: Vec<Finding>,
    warnings: Vec<Finding>,
    hints: Vec<Finding>,
}

impl FindingsBuilder {
    pub(crate) fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Critical => self.critical.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Info => self.hints.push(finding),
        }
    }

    pub(crate) fn finish(self, validated_at: DateTime<Utc>) -> ValidationReport {
        let status = ValidationStatus::from_counts(self.critical.len(), self.warnings.len());
        ValidationReport {
            critical: self.critical,
            warnings: self.warnings,
            hints: self.hints,
            status,
            validated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOverview {
    pub status: ValidationStatus,
    pub is_valid: bool,
    pub can_submit: bool,
    pub summary: ValidationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub success: bool,
    pub validation: ValidationOverview,
    pub kritische_fehler: Vec<Finding>,
    pub warnungen: Vec<Finding>,
    pub hinweise: Vec<Finding>,
    pub validated_at: DateTime<Utc>,
}
