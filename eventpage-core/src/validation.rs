//! Config Checks - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy decides whether they block export. Rendering never consults either.

use serde::{Deserialize, Serialize};

use crate::color::is_valid_hex;
use crate::config::EventConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub field: String,
    pub message: String,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    #[default]
    Block,
    Warn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub trait ConfigRule {
    fn name(&self) -> &'static str;
    fn check(&self, config: &EventConfig) -> Vec<Violation>;
}

// --- Concrete Rules ---

pub struct ColorFormatRule;

impl ConfigRule for ColorFormatRule {
    fn name(&self) -> &'static str { "color_format" }

    fn check(&self, config: &EventConfig) -> Vec<Violation> {
        config.colors.entries()
            .into_iter()
            .filter(|(_, value)| !is_valid_hex(value))
            .map(|(field, value)| Violation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                field: field.to_string(),
                message: format!("'{}' is not a #RRGGBB color and renders as black", value),
                remediation: vec!["Use a six-digit hex color such as #c23b22".to_string()],
            })
            .collect()
    }
}

/// Schemes a browser would execute or inline from an `href`
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

pub struct RsvpUrlRule;

impl RsvpUrlRule {
    /// Browsers drop ASCII whitespace and control characters inside a scheme,
    /// so `java\tscript:` still executes.
    fn normalized_scheme_prefix(url: &str) -> String {
        url.chars()
            .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
            .take(16)
            .collect::<String>()
            .to_ascii_lowercase()
    }
}

impl ConfigRule for RsvpUrlRule {
    fn name(&self) -> &'static str { "rsvp_url" }

    fn check(&self, config: &EventConfig) -> Vec<Violation> {
        let url = config.event_url.trim();
        if url.is_empty() {
            return vec![Violation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                field: "eventURL".to_string(),
                message: "RSVP URL is empty; the ticket button goes nowhere".to_string(),
                remediation: vec!["Paste the event's RSVP link".to_string()],
            }];
        }

        let prefix = Self::normalized_scheme_prefix(url);
        match UNSAFE_SCHEMES.iter().find(|scheme| prefix.starts_with(*scheme)) {
            Some(scheme) => vec![Violation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                field: "eventURL".to_string(),
                message: format!("RSVP URL uses the unsafe '{}' scheme", scheme.trim_end_matches(':')),
                remediation: vec!["Use an http:// or https:// link".to_string()],
            }],
            None => vec![],
        }
    }
}

pub struct EventNameRule;

impl ConfigRule for EventNameRule {
    fn name(&self) -> &'static str { "event_name" }

    fn check(&self, config: &EventConfig) -> Vec<Violation> {
        if !config.event_name_en.trim().is_empty() {
            return vec![];
        }
        vec![Violation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Warning,
            field: "eventNameEn".to_string(),
            message: "English event name is empty; export falls back to event.html".to_string(),
            remediation: vec!["Enter an English event name".to_string()],
        }]
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ConfigRule>>,
    failure_mode: FailureMode,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_failure_mode(FailureMode::default())
    }

    pub fn with_failure_mode(failure_mode: FailureMode) -> Self {
        Self {
            rules: vec![
                Box::new(ColorFormatRule),
                Box::new(RsvpUrlRule),
                Box::new(EventNameRule),
            ],
            failure_mode,
        }
    }

    pub fn validate(&self, config: &EventConfig) -> ValidationResult {
        let violations: Vec<_> = self.rules.iter()
            .flat_map(|rule| rule.check(config))
            .collect();

        for v in &violations {
            tracing::warn!(rule = %v.rule, field = %v.field, "{}", v.message);
        }

        let has_errors = violations.iter()
            .any(|v| v.severity == ViolationSeverity::Error);

        let valid = match self.failure_mode {
            FailureMode::Block => !has_errors,
            FailureMode::Warn => true,
        };

        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_hit(result: &ValidationResult) -> Vec<&str> {
        result.violations.iter().map(|v| v.rule.as_str()).collect()
    }

    #[test]
    fn test_default_record_is_clean() {
        let result = Validator::new().validate(&EventConfig::default());
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_malformed_color_warns_without_blocking() {
        let mut config = EventConfig::default();
        config.colors.gold = "notacolor".into();
        let result = Validator::new().validate(&config);
        assert!(result.valid);
        assert_eq!(rules_hit(&result), vec!["color_format"]);
        assert_eq!(result.violations[0].field, "gold");
    }

    #[test]
    fn test_script_urls_block_export() {
        for url in ["javascript:alert(1)", "  JavaScript:void(0)", "java\tscript:x", "data:text/html,hi", "vbscript:msg"] {
            let mut config = EventConfig::default();
            config.event_url = url.into();
            let result = Validator::new().validate(&config);
            assert!(!result.valid, "{url:?}");
            assert!(result.has_errors());
        }
    }

    #[test]
    fn test_relative_and_mailto_urls_pass() {
        for url in ["#reserve", "/rsvp", "mailto:board@example.org", "https://example.org/?q=javascript:"] {
            let mut config = EventConfig::default();
            config.event_url = url.into();
            assert!(Validator::new().validate(&config).valid, "{url}");
        }
    }

    #[test]
    fn test_warn_mode_never_blocks() {
        let mut config = EventConfig::default();
        config.event_url = "javascript:alert(1)".into();
        let result = Validator::with_failure_mode(FailureMode::Warn).validate(&config);
        assert!(result.valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_empty_name_and_url_warn() {
        let mut config = EventConfig::default();
        config.event_name_en.clear();
        config.event_url.clear();
        let result = Validator::new().validate(&config);
        assert!(result.valid);
        assert_eq!(rules_hit(&result), vec!["rsvp_url", "event_name"]);
    }
}
