use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Text a unit contributes to the prefix header.
///
/// Manifests may give a single string or a list of lines; lines are joined
/// with `\n`. Equality is on the joined text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SnippetRepr", into = "String")]
pub struct Snippet(String);

impl Snippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Snippet {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Snippet {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<Snippet> for String {
    fn from(snippet: Snippet) -> Self {
        snippet.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnippetRepr {
    Text(String),
    Lines(Vec<String>),
}

impl From<SnippetRepr> for Snippet {
    fn from(repr: SnippetRepr) -> Self {
        match repr {
            SnippetRepr::Text(text) => Snippet(text),
            SnippetRepr::Lines(lines) => Snippet::from_lines(lines),
        }
    }
}

/// One upstream contributor to a generated header.
///
/// Both contributions are optional; a unit with neither is valid and
/// contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputUnit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_header_contents: Option<Snippet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_header_file: Option<Utf8PathBuf>,
}

impl InputUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<Snippet>) -> Self {
        self.prefix_header_contents = Some(snippet.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.prefix_header_file = Some(path.into());
        self
    }

    pub fn snippet(&self) -> Option<&str> {
        self.prefix_header_contents.as_ref().map(Snippet::as_str)
    }

    pub fn raw_file(&self) -> Option<&Utf8Path> {
        self.prefix_header_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_join_with_newline() {
        let s = Snippet::from_lines(["#define A 1", "#define B 2"]);
        assert_eq!(s.as_str(), "#define A 1\n#define B 2");
    }

    #[test]
    fn list_and_string_forms_compare_equal() {
        let text: Snippet = serde_json::from_str(r##""#define A 1\n#define B 2""##).unwrap();
        let lines: Snippet = serde_json::from_str(r##"["#define A 1", "#define B 2"]"##).unwrap();
        assert_eq!(text, lines);
    }

    #[test]
    fn snippet_serializes_as_plain_string() {
        let s = Snippet::from_lines(["a", "b"]);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""a\nb""#);
    }

    #[test]
    fn unit_accessors_expose_optional_fields() {
        let unit = InputUnit::new("AFNetworking")
            .with_snippet("#import <SystemConfiguration/SystemConfiguration.h>")
            .with_file("AFNetworking/AFNetworking-prefix.h");
        assert_eq!(
            unit.snippet(),
            Some("#import <SystemConfiguration/SystemConfiguration.h>")
        );
        assert_eq!(
            unit.raw_file().map(Utf8Path::as_str),
            Some("AFNetworking/AFNetworking-prefix.h")
        );

        let bare = InputUnit::new("Empty");
        assert_eq!(bare.snippet(), None);
        assert_eq!(bare.raw_file(), None);
    }
}
