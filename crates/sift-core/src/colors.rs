//! ANSI color codes for tree dumps.
//!
//! - Blue: node kinds (`Word`, `Or`)
//! - Green: literal text and bounds
//! - Dim: fields, boosts, spans
//! - Yellow: leftovers that should have been consumed (markers, operators)

#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub node: &'static str,
    pub literal: &'static str,
    pub meta: &'static str,
    pub leftover: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        node: "\x1b[34m",
        literal: "\x1b[32m",
        meta: "\x1b[2m",
        leftover: "\x1b[33m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        node: "",
        literal: "",
        meta: "",
        leftover: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
