//! Configuration options for section analysis.
//!
//! The `Options` struct controls how HTML is normalized and segmented and
//! which rules score the resulting sections. Options can be built in code or
//! loaded from a JSON document in which every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rules::RuleSet;

/// Configuration options for section analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use articleparse::Options;
///
/// let options = Options {
///     min_section_len: 50,
///     ..Options::default()
/// };
/// assert_eq!(options.container_tag, "div");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Minimum character length of a fragment to become a section.
    ///
    /// Fragments must be strictly longer than this.
    ///
    /// Default: `100`
    pub min_section_len: usize,

    /// Tag whose open and close forms delimit sections.
    ///
    /// Default: `"div"`
    pub container_tag: String,

    /// Tags kept (as bare `<tag>`/`</tag>`) while all other markup is stripped.
    ///
    /// Both the open and close form of each entry are kept. The container
    /// tag and `a` must be present for segmentation and anchor analysis to
    /// see anything.
    ///
    /// Default: `["div", "span", "a"]`
    pub retain_tags: Vec<String>,

    /// Retained tags rewritten to another tag after stripping, as
    /// `(from, to)` pairs.
    ///
    /// Default: `[("span", "div")]`
    pub tag_aliases: Vec<(String, String)>,

    /// Rules used to score each section.
    ///
    /// Default: [`RuleSet::default`]
    pub rules: RuleSet,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_section_len: 100,
            container_tag: "div".to_string(),
            retain_tags: vec!["div".to_string(), "span".to_string(), "a".to_string()],
            tag_aliases: vec![("span".to_string(), "div".to_string())],
            rules: RuleSet::default(),
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and parses a JSON options file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks tag names and every classification rule.
    pub fn validate(&self) -> Result<()> {
        if !is_tag_name(&self.container_tag) {
            return Err(Error::InvalidOptions(format!(
                "container tag {:?} is not a plain tag name",
                self.container_tag
            )));
        }
        if let Some(tag) = self.retain_tags.iter().find(|t| !is_tag_name(t)) {
            return Err(Error::InvalidOptions(format!(
                "retained tag {tag:?} is not a plain tag name"
            )));
        }
        for (from, to) in &self.tag_aliases {
            if !is_tag_name(from) || !is_tag_name(to) {
                return Err(Error::InvalidOptions(format!(
                    "tag alias {from:?} -> {to:?} must map plain tag names"
                )));
            }
        }
        self.rules.validate()
    }
}

fn is_tag_name(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Comparator, Threshold};
    use crate::section::Feature;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.min_section_len, 100);
        assert_eq!(opts.container_tag, "div");
        assert_eq!(opts.retain_tags, vec!["div", "span", "a"]);
        assert_eq!(opts.tag_aliases, vec![("span".to_string(), "div".to_string())]);
        assert_eq!(opts.rules, RuleSet::default());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let opts = match Options::from_json(r#"{"min_section_len": 20}"#) {
            Ok(opts) => opts,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(opts.min_section_len, 20);
        assert_eq!(opts.container_tag, "div");
        assert_eq!(opts.rules.len(), 3);
    }

    #[test]
    fn test_rules_override_from_json() {
        let json = r#"{
            "rules": [
                {"feature": "anchor_density", "threshold": 0.5, "comparator": "less_than", "margin": 0}
            ],
            "tag_aliases": []
        }"#;
        let opts = match Options::from_json(json) {
            Ok(opts) => opts,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(opts.rules.len(), 1);
        let rule = opts.rules.rules()[0];
        assert_eq!(rule.feature, Feature::AnchorDensity);
        assert_eq!(rule.threshold, Threshold::Scalar(0.5));
        assert_eq!(rule.comparator, Comparator::LessThan);
        assert!(opts.tag_aliases.is_empty());
    }

    #[test]
    fn test_invalid_rule_in_json_is_rejected() {
        let json = r#"{"rules": [{"feature": "word_count", "threshold": 40, "comparator": "between_exclusive"}]}"#;
        assert!(matches!(Options::from_json(json), Err(Error::InvalidRule(_))));
    }

    #[test]
    fn test_unknown_feature_is_a_parse_error() {
        let json = r#"{"rules": [{"feature": "bad_member", "threshold": 1, "comparator": "less_than"}]}"#;
        assert!(matches!(Options::from_json(json), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_tag_names_are_rejected() {
        let opts = Options {
            container_tag: "<div>".to_string(),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));

        let opts = Options {
            retain_tags: vec!["div".to_string(), String::new()],
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        match Options::from_file("/nonexistent/articleparse-options.json") {
            Err(Error::Io { path, .. }) => {
                assert!(path.ends_with("articleparse-options.json"));
            }
            other => panic!("expected Err(Io), got {other:?}"),
        }
    }
}
