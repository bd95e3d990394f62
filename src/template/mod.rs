//! Changelog template: the JSON schema users author and its Markdown renderer
//!
//! A template is a fixed tree of optional sections. Each leaf is a
//! [TextNode] naming a [Directive] for its text and an optional directive to
//! emit after it:
//!
//! ```json
//! {
//!   "title": {"attr": "H1", "text": "Change Log", "breakAfter": "horizontalRule"},
//!   "eachVersion": {
//!     "tag": {"attr": "H2", "breakAfter": "newLine"},
//!     "feat": {
//!       "title": {"attr": "H3", "text": "Features Added", "breakAfter": "newLine"},
//!       "each": {"description": {"attr": "bold", "breakAfter": "newLine"}}
//!     }
//!   }
//! }
//! ```
//!
//! Missing sections render nothing, and unknown keys are ignored. Values of
//! the wrong JSON type are treated as missing rather than failing the load.

pub mod directive;
pub mod renderer;

pub use directive::Directive;
pub use renderer::MarkdownRenderer;

use crate::domain::CommitKind;
use crate::error::{ChangelogError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Top level of a changelog template.
///
/// `Default` is the built-in template used when no template file is given.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogTemplate {
    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub introduction: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub each_version: Option<VersionNode>,
}

/// A styled piece of text followed by an optional break
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(
        default,
        deserialize_with = "lenient_directive",
        skip_serializing_if = "Option::is_none"
    )]
    pub attr: Option<Directive>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_directive",
        skip_serializing_if = "Option::is_none"
    )]
    pub break_after: Option<Directive>,
}

/// Layout repeated for every release
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VersionNode {
    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub feat: Option<CategoryNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub fix: Option<CategoryNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub change: Option<CategoryNode>,
}

/// Layout of one commit category within a release
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CategoryNode {
    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub each: Option<EachNode>,
}

/// Layout of a single commit entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EachNode {
    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<TextNode>,

    #[serde(
        default,
        deserialize_with = "lenient_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub footer: Option<TextNode>,
}

/// A section of the wrong JSON type is treated as absent
fn lenient_section<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn lenient_directive<'de, D>(deserializer: D) -> std::result::Result<Option<Directive>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => Some(Directive::from(name)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl TextNode {
    pub fn new(attr: Directive, text: Option<&str>, break_after: Option<Directive>) -> Self {
        TextNode {
            attr: Some(attr),
            text: text.map(str::to_string),
            break_after,
        }
    }
}

impl VersionNode {
    /// Template section for a commit category
    pub fn category(&self, kind: CommitKind) -> Option<&CategoryNode> {
        match kind {
            CommitKind::Feature => self.feat.as_ref(),
            CommitKind::Fix => self.fix.as_ref(),
            CommitKind::Change => self.change.as_ref(),
        }
    }
}

impl CategoryNode {
    fn standard(title: &str) -> Self {
        CategoryNode {
            title: Some(TextNode::new(
                Directive::Heading3,
                Some(title),
                Some(Directive::NewLine),
            )),
            each: Some(EachNode {
                description: Some(TextNode::new(Directive::Bold, None, Some(Directive::NewLine))),
                body: Some(TextNode::new(Directive::Bullet, None, Some(Directive::NewLine))),
                footer: Some(TextNode::new(Directive::Paragraph, None, Some(Directive::NewLine))),
            }),
        }
    }
}

impl Default for ChangelogTemplate {
    fn default() -> Self {
        ChangelogTemplate {
            title: Some(TextNode::new(
                Directive::Heading1,
                Some("Change Log"),
                Some(Directive::HorizontalRule),
            )),
            introduction: Some(TextNode::new(Directive::Bold, None, Some(Directive::NewLine))),
            each_version: Some(VersionNode {
                tag: Some(TextNode::new(Directive::Heading2, None, Some(Directive::NewLine))),
                feat: Some(CategoryNode::standard("Features Added")),
                fix: Some(CategoryNode::standard("Bugs Addressed")),
                change: Some(CategoryNode::standard("Existing Feature Modifications")),
            }),
        }
    }
}

impl ChangelogTemplate {
    /// Parse a template from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChangelogError::template(format!("Invalid template JSON: {}", e)))
    }

    /// Load a template file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ChangelogError::template(format!(
                "Cannot read template file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// Load the template file if one is given, otherwise use the built-in template
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize as pretty-printed JSON, e.g. as a starting point for a custom template
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChangelogError::template(format!("Cannot serialize template: {}", e)))
    }
}
