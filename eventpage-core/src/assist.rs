//! AI-Assist Merge
//!
//! The assistant returns a partial copy record. Only present, non-empty
//! values overwrite the current record. Text content is never judged here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EventConfig;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Enter an English event name before requesting copy")]
    MissingEventName,

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Copy fields the assistant may return, keyed as the assistant emits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistCopy {
    pub event_name_jp: Option<String>,
    pub hero_tagline: Option<String>,
    pub exp_headline: Option<String>,
    pub exp_desc: Option<String>,
    pub inc1: Option<String>,
    pub inc1d: Option<String>,
    pub inc2: Option<String>,
    pub inc2d: Option<String>,
    pub inc3: Option<String>,
    pub inc3d: Option<String>,
    pub inc4: Option<String>,
    pub inc4d: Option<String>,
    pub quote_text: Option<String>,
    pub quote_attr: Option<String>,
}

/// Which record fields a merge overwrote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub updated: Vec<&'static str>,
}

impl MergeReport {
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
    }
}

/// An assist request needs an English name to work from.
pub fn ensure_ready(config: &EventConfig) -> Result<(), AssistError> {
    if config.event_name_en.is_empty() {
        return Err(AssistError::MissingEventName);
    }
    Ok(())
}

impl AssistCopy {
    /// Parse the assistant's raw response body. An empty body means no fields.
    pub fn from_json(raw: &str) -> Result<Self, AssistError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn merge_into(&self, config: &mut EventConfig) -> MergeReport {
        let mut report = MergeReport::default();
        let [inc1, inc2, inc3, inc4] = &mut config.inclusions;

        let targets: [(&'static str, &Option<String>, &mut String); 14] = [
            ("eventNameJp", &self.event_name_jp, &mut config.event_name_jp),
            ("heroTagline", &self.hero_tagline, &mut config.hero_tagline),
            ("expHeadline", &self.exp_headline, &mut config.exp_headline),
            ("expDesc", &self.exp_desc, &mut config.exp_desc),
            ("inc1", &self.inc1, &mut inc1.title),
            ("inc1d", &self.inc1d, &mut inc1.detail),
            ("inc2", &self.inc2, &mut inc2.title),
            ("inc2d", &self.inc2d, &mut inc2.detail),
            ("inc3", &self.inc3, &mut inc3.title),
            ("inc3d", &self.inc3d, &mut inc3.detail),
            ("inc4", &self.inc4, &mut inc4.title),
            ("inc4d", &self.inc4d, &mut inc4.detail),
            ("quoteText", &self.quote_text, &mut config.quote_text),
            ("quoteAttr", &self.quote_attr, &mut config.quote_attr),
        ];

        for (key, incoming, field) in targets {
            match incoming.as_deref() {
                Some(value) if !value.is_empty() => {
                    *field = value.to_string();
                    report.updated.push(key);
                }
                _ => {}
            }
        }

        tracing::debug!(updated = ?report.updated, "Merged assistant copy");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_keep_existing_fields() {
        let mut config = EventConfig::default();
        let before = config.clone();
        let copy = AssistCopy::from_json(r#"{"eventNameJp": "", "heroTagline": "New tagline"}"#).unwrap();

        let report = copy.merge_into(&mut config);

        assert_eq!(config.event_name_jp, before.event_name_jp);
        assert_eq!(config.hero_tagline, "New tagline");
        assert_eq!(report.updated, vec!["heroTagline"]);

        config.hero_tagline = before.hero_tagline.clone();
        assert_eq!(config, before);
    }

    #[test]
    fn test_inclusions_merge_positionally() {
        let mut config = EventConfig::default();
        let copy = AssistCopy {
            inc2: Some("Sushi platter".into()),
            inc4d: Some("Bring a friend".into()),
            ..Default::default()
        };

        copy.merge_into(&mut config);

        assert_eq!(config.inclusions[1].title, "Sushi platter");
        assert_eq!(config.inclusions[3].detail, "Bring a friend");
        assert_eq!(config.inclusions[0], EventConfig::default().inclusions[0]);
    }

    #[test]
    fn test_empty_body_is_no_op() {
        let mut config = EventConfig::default();
        let report = AssistCopy::from_json("  ").unwrap().merge_into(&mut config);
        assert!(report.is_empty());
        assert_eq!(config, EventConfig::default());
    }

    #[test]
    fn test_malformed_body_is_error() {
        assert!(matches!(
            AssistCopy::from_json("{not json"),
            Err(AssistError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_ready_requires_english_name() {
        let mut config = EventConfig::default();
        assert!(ensure_ready(&config).is_ok());
        config.event_name_en = "   ".into();
        assert!(ensure_ready(&config).is_ok());
        config.event_name_en.clear();
        assert!(matches!(ensure_ready(&config), Err(AssistError::MissingEventName)));
    }
}
