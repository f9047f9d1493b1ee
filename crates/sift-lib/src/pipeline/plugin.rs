use super::Filter;
use crate::Result;
use crate::recognize::Recognizer;

/// Recognizers paired with their priority.
pub type Recognizers = Vec<(Box<dyn Recognizer>, i32)>;

/// A unit of syntax: recognizers that tag input and filters that rewrite
/// the tagged nodes.
///
/// Plugins are configuration. Everything they hand out must be free of
/// per-parse state so one parser can serve concurrent calls.
pub trait Plugin: Send + Sync {
    /// Identifies the plugin for replacement and removal.
    fn name(&self) -> &'static str;

    /// Compiles this plugin's recognizers. Fails on invalid patterns.
    fn recognizers(&self) -> Result<Recognizers> {
        Ok(Vec::new())
    }

    fn filters(&self) -> Vec<Filter> {
        Vec::new()
    }
}

/// Boxes a recognizer with its priority.
pub(crate) fn entry(
    recognizer: impl Recognizer + 'static,
    priority: i32,
) -> (Box<dyn Recognizer>, i32) {
    (Box::new(recognizer), priority)
}
