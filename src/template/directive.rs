use serde::{Deserialize, Serialize};
use std::fmt;

/// Markdown styling applied to one emitted line of the changelog.
///
/// Template files name directives by string (`"H1"`, `"bold"`, ...). Names
/// that are not recognised are kept and rendered as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Directive {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Bullet,
    Paragraph,
    HorizontalRule,
    NewLine,
    Other(String),
}

impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Directive::Heading1 => "H1",
            Directive::Heading2 => "H2",
            Directive::Heading3 => "H3",
            Directive::Bold => "bold",
            Directive::Bullet => "bullet",
            Directive::Paragraph => "para",
            Directive::HorizontalRule => "horizontalRule",
            Directive::NewLine => "newLine",
            Directive::Other(name) => name,
        }
    }
}

impl From<&str> for Directive {
    fn from(name: &str) -> Self {
        match name {
            "H1" => Directive::Heading1,
            "H2" => Directive::Heading2,
            "H3" => Directive::Heading3,
            "bold" => Directive::Bold,
            "bullet" => Directive::Bullet,
            "para" => Directive::Paragraph,
            "horizontalRule" => Directive::HorizontalRule,
            "newLine" => Directive::NewLine,
            other => Directive::Other(other.to_string()),
        }
    }
}

impl From<String> for Directive {
    fn from(name: String) -> Self {
        Directive::from(name.as_str())
    }
}

impl From<Directive> for String {
    fn from(directive: Directive) -> Self {
        directive.name().to_string()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Append `text` to `out` as one Markdown line styled by `directive`.
///
/// A missing directive emits the text as is.
pub fn emit(out: &mut String, text: &str, directive: Option<&Directive>) {
    match directive {
        Some(Directive::Heading1) => {
            out.push_str("# ");
            out.push_str(text);
        }
        Some(Directive::Heading2) => {
            out.push_str("## ");
            out.push_str(text);
        }
        Some(Directive::Heading3) => {
            out.push_str("### ");
            out.push_str(text);
        }
        Some(Directive::Bold) => {
            out.push_str("**");
            out.push_str(text);
            out.push_str("**");
        }
        Some(Directive::Bullet) => {
            out.push_str("- ");
            out.push_str(text);
        }
        Some(Directive::HorizontalRule) => out.push_str("---"),
        Some(Directive::NewLine) => {}
        Some(Directive::Paragraph) | Some(Directive::Other(_)) | None => out.push_str(text),
    }
    out.push('\n');
}
