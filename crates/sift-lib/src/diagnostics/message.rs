use rowan::TextRange;

/// Conditions the parser recovered from.
///
/// Parsing always produces a tree. Each kind names the local recovery that
/// was applied so callers can decide whether the result is trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Bracket imbalance, contents flattened or bracket dropped
    UnclosedGroup,
    UnmatchedCloseBracket,

    // Operator left in the tree without operands
    DanglingOperator,

    // Markers demoted back to literal text
    UnknownField,
    DanglingField,
    DanglingComparison,
    BoostWithoutTarget,
    InvalidBoost,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnclosedGroup | Self::UnmatchedCloseBracket | Self::DanglingOperator => {
                Severity::Warning
            }
            _ => Severity::Info,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedCloseBracket => "unmatched `)`",
            Self::DanglingOperator => "operator has no operand",
            Self::UnknownField => "unknown field, treated as text",
            Self::DanglingField => "field prefix has nothing to apply to",
            Self::DanglingComparison => "comparison needs a field and a value",
            Self::BoostWithoutTarget => "boost has nothing to apply to",
            Self::InvalidBoost => "boost is not a number",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownField => "`{}` is not a known field, treated as text".to_string(),
            Self::DanglingOperator => "`{}` has no operand".to_string(),
            Self::InvalidBoost => "`{}` is not a valid boost".to_string(),
            Self::UnclosedGroup => format!("{}; {{}}", self.fallback_message()),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Byte range in the query string.
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            message: kind.fallback_message().to_string(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}
