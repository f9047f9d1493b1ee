//! JSON parser configuration.
//!
//! ```json
//! {
//!   "default_field": "body",
//!   "schema": { "title": "lowercase", "body": "whitespace", "id": "keyword" },
//!   "multifield": { "fields": ["title", "body"], "boosts": { "title": 2.0 } },
//!   "aliases": { "title": ["t", "heading"] },
//!   "operators": [{ "group": "and", "pattern": "\\s+&&\\s+" }, { "group": "require" }]
//! }
//! ```
//!
//! An operator entry without a pattern (or with `null`) removes that operator.

use indexmap::IndexMap;
use serde::Deserialize;
use sift_core::{FieldSchema, GroupKind};

use crate::Result;
use crate::pipeline::{QueryParser, QueryParserBuilder};
use crate::plugins::{
    ComparisonPlugin, CopyFieldPlugin, FieldAliasPlugin, FieldsPlugin, MultifieldPlugin,
    OperatorsPlugin, PlusMinusPlugin,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub default_field: Option<String>,
    pub schema: Option<FieldSchema>,
    /// Read field names missing from the schema as text.
    pub reject_unknown_fields: bool,
    pub multifield: Option<MultifieldConfig>,
    /// Canonical field name -> aliases.
    pub aliases: IndexMap<String, Vec<String>>,
    pub copy_fields: Option<CopyFieldConfig>,
    pub operators: Vec<OperatorConfig>,
    /// Read `+`/`-` prefixes as required/banned markers. Meant for queries
    /// without operator keywords.
    pub plus_minus: bool,
    pub comparisons: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_field: None,
            schema: None,
            reject_unknown_fields: true,
            multifield: None,
            aliases: IndexMap::new(),
            copy_fields: None,
            operators: Vec::new(),
            plus_minus: false,
            comparisons: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultifieldConfig {
    pub fields: Vec<String>,
    #[serde(default)]
    pub boosts: IndexMap<String, f32>,
    #[serde(default = "or_group")]
    pub group: GroupKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyFieldConfig {
    /// Source field -> destination field.
    pub map: IndexMap<String, String>,
    /// `null` places copies inline.
    #[serde(default = "some_or_group")]
    pub group: Option<GroupKind>,
    #[serde(default)]
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorConfig {
    pub group: GroupKind,
    #[serde(default)]
    pub pattern: Option<String>,
}

fn or_group() -> GroupKind {
    GroupKind::Or
}

fn some_or_group() -> Option<GroupKind> {
    Some(GroupKind::Or)
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A builder with the default plugins adjusted by this configuration.
    pub fn builder(&self) -> QueryParserBuilder {
        let mut builder = QueryParser::builder().default_plugins();
        if let Some(field) = &self.default_field {
            builder = builder.default_field(field.clone());
        }
        if let Some(schema) = &self.schema {
            builder = builder.schema(schema.clone());
        }

        builder = builder.plugin(FieldsPlugin::new().reject_unknown(self.reject_unknown_fields));
        if !self.operators.is_empty() {
            let operators = self
                .operators
                .iter()
                .fold(OperatorsPlugin::new(), |plugin, op| {
                    plugin.set_pattern(op.group, op.pattern.as_deref())
                });
            builder = builder.plugin(operators);
        }
        if self.plus_minus {
            builder = builder.plugin(PlusMinusPlugin::new());
        }
        if !self.comparisons {
            builder = builder.without_plugin(ComparisonPlugin::NAME);
        }

        if let Some(multi) = &self.multifield {
            builder = builder.plugin(
                MultifieldPlugin::new(multi.fields.iter().cloned())
                    .boosts(multi.boosts.clone())
                    .group(multi.group),
            );
        }
        if !self.aliases.is_empty() {
            builder = builder.plugin(FieldAliasPlugin::from_map(self.aliases.clone()));
        }
        if let Some(copy) = &self.copy_fields {
            let mut plugin = CopyFieldPlugin::new(copy.map.clone()).group(copy.group);
            if copy.mirror {
                plugin = plugin.mirror();
            }
            builder = builder.plugin(plugin);
        }
        builder
    }

    pub fn build(&self) -> Result<QueryParser> {
        self.builder().build()
    }
}
