// placeholder macros recognised in the metadata template

use crate::utils::version::VersionInfo;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DOCUMENT_VERSION: LazyLock<Regex> = LazyLock::new(|| Placeholder::compile("DocumentVersion"));
static DOCUMENT_DATE: LazyLock<Regex> = LazyLock::new(|| Placeholder::compile("DocumentDate"));
static VALID_UNTIL: LazyLock<Regex> = LazyLock::new(|| Placeholder::compile("ValidUntil"));
static NEXT_REVIEW: LazyLock<Regex> = LazyLock::new(|| Placeholder::compile("NextReview"));

/// a `\newcommand{\Name}{value}` assignment whose value gets rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    DocumentVersion,
    DocumentDate,
    ValidUntil,
    NextReview,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::DocumentVersion,
        Placeholder::DocumentDate,
        Placeholder::ValidUntil,
        Placeholder::NextReview,
    ];

    /// macro name without the leading backslash
    pub fn macro_name(self) -> &'static str {
        match self {
            Placeholder::DocumentVersion => "DocumentVersion",
            Placeholder::DocumentDate => "DocumentDate",
            Placeholder::ValidUntil => "ValidUntil",
            Placeholder::NextReview => "NextReview",
        }
    }

    /// pattern with three groups: prefix up to the opening value brace, value, closing brace
    pub fn pattern(self) -> &'static Regex {
        match self {
            Placeholder::DocumentVersion => &*DOCUMENT_VERSION,
            Placeholder::DocumentDate => &*DOCUMENT_DATE,
            Placeholder::ValidUntil => &*VALID_UNTIL,
            Placeholder::NextReview => &*NEXT_REVIEW,
        }
    }

    /// value from `info` that belongs in this placeholder
    pub fn value_from(self, info: &VersionInfo) -> &str {
        match self {
            Placeholder::DocumentVersion => &info.version,
            Placeholder::DocumentDate => &info.document_date,
            Placeholder::ValidUntil => &info.valid_until,
            Placeholder::NextReview => &info.next_review,
        }
    }

    fn compile(name: &str) -> Regex {
        let pattern = format!(
            r"(\\newcommand\{{\\{}\}}\{{)([^}}]+)(\}})",
            regex::escape(name)
        );
        // the pattern is assembled from fixed macro names
        Regex::new(&pattern).expect("placeholder pattern is valid")
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.macro_name())
    }
}
