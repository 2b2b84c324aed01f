//! Per-syntax rendering tokens.
//!
//! The renderer never branches on the output dialect — every decision is
//! "which token", made once here when the profile is selected for the run.

use crate::config::Syntax;

/// Fixed token bundle for one output syntax.
#[derive(Debug)]
pub struct SyntaxProfile {
    pub h1: &'static str,
    pub h2: &'static str,
    /// Reserved for sub-sections; no block uses it yet.
    #[allow(dead_code)]
    pub h3: &'static str,
    pub hr: &'static str,
    pub list_item: &'static str,
    /// Wrapped around text, same string on both sides.
    pub emphasis: &'static str,
}

static MARKDOWN: SyntaxProfile = SyntaxProfile {
    h1: "# ",
    h2: "## ",
    h3: "### ",
    hr: "---",
    list_item: "* ",
    emphasis: "*",
};

static ASCIIDOC: SyntaxProfile = SyntaxProfile {
    h1: "= ",
    h2: "== ",
    h3: "== ",
    hr: "---",
    list_item: "* ",
    emphasis: "_",
};

impl Syntax {
    pub fn profile(self) -> &'static SyntaxProfile {
        match self {
            Syntax::Markdown => &MARKDOWN,
            Syntax::Asciidoc => &ASCIIDOC,
        }
    }
}
