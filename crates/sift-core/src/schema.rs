//! Field schema consulted by filters and by leaf analysis.

use indexmap::IndexMap;

/// Field lookups used while parsing.
///
/// Implementations must be immutable once handed to a parser: the same
/// schema is shared by every parse call.
pub trait Schema: Send + Sync {
    fn has_field(&self, name: &str) -> bool;

    /// Splits `text` into the terms `field` indexes.
    fn analyze(&self, field: &str, text: &str) -> Vec<String> {
        let _ = field;
        Analyzer::Whitespace.analyze(text)
    }
}

/// Per-field text analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Analyzer {
    /// Whole text is one term.
    Keyword,
    #[default]
    Whitespace,
    /// Whitespace split, lowercased.
    Lowercase,
}

impl Analyzer {
    pub fn analyze(self, text: &str) -> Vec<String> {
        match self {
            Self::Keyword if text.is_empty() => Vec::new(),
            Self::Keyword => vec![text.to_owned()],
            Self::Whitespace => text.split_whitespace().map(str::to_owned).collect(),
            Self::Lowercase => text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }
}

/// Ordered field name → analyzer table.
///
/// JSON form is a plain object: `{"title": "lowercase", "id": "keyword"}`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: IndexMap<String, Analyzer>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_field(mut self, name: impl Into<String>, analyzer: Analyzer) -> Self {
        self.fields.insert(name.into(), analyzer);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, analyzer: Analyzer) {
        self.fields.insert(name.into(), analyzer);
    }

    pub fn analyzer(&self, name: &str) -> Option<Analyzer> {
        self.fields.get(name).copied()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Schema for FieldSchema {
    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn analyze(&self, field: &str, text: &str) -> Vec<String> {
        self.analyzer(field).unwrap_or_default().analyze(text)
    }
}

impl<N: Into<String>> FromIterator<(N, Analyzer)> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = (N, Analyzer)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(n, a)| (n.into(), a)).collect(),
        }
    }
}
