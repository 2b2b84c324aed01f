//! Resolved run configuration.
//!
//! The closed option sets (category, syntax, language, component type) are
//! `ValueEnum`s so clap rejects out-of-set values with a usage message
//! before any work happens. Downstream code consumes the typed values and
//! never re-validates.

use crate::model::TagKind;
use clap::ValueEnum;
use std::path::PathBuf;

/// Which document is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Glossary,
    Architecture,
}

impl Category {
    /// Translation-vocabulary key, also used for the default file name.
    pub fn key(self) -> &'static str {
        match self {
            Category::Glossary => "glossary",
            Category::Architecture => "architecture",
        }
    }
}

/// Target markup dialect. Controls token rendering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Syntax {
    Markdown,
    Asciidoc,
}

impl Syntax {
    pub fn file_extension(self) -> &'static str {
        match self {
            Syntax::Markdown => "md",
            Syntax::Asciidoc => "adoc",
        }
    }
}

/// Output language for the fixed translation vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    En,
    Pl,
}

/// Optional glossary restriction to one marker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComponentType {
    Event,
    Service,
    Entity,
    Feature,
}

impl ComponentType {
    pub fn tag_kind(self) -> TagKind {
        match self {
            ComponentType::Event => TagKind::Event,
            ComponentType::Service => TagKind::Service,
            ComponentType::Entity => TagKind::Entity,
            ComponentType::Feature => TagKind::Feature,
        }
    }

    /// Translation-vocabulary key.
    pub fn key(self) -> &'static str {
        match self {
            ComponentType::Event => "event",
            ComponentType::Service => "service",
            ComponentType::Entity => "entity",
            ComponentType::Feature => "feature",
        }
    }
}

/// Everything one run needs, resolved once and threaded through the
/// filter and renderer. No global state.
#[derive(Debug)]
pub struct RunConfig {
    pub category: Category,
    pub syntax: Syntax,
    pub language: Language,
    /// Bounded-context restriction. `None` when absent or empty.
    pub context: Option<String>,
    pub component_type: Option<ComponentType>,
    pub output: PathBuf,
}

impl RunConfig {
    pub fn resolve(
        category: Category,
        syntax: Syntax,
        language: Language,
        context: Option<String>,
        component_type: Option<ComponentType>,
        output: Option<PathBuf>,
    ) -> RunConfig {
        let output = output.unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", category.key(), syntax.file_extension()))
        });
        RunConfig {
            category,
            syntax,
            language,
            // An explicitly empty context means "no restriction".
            context: context.filter(|c| !c.is_empty()),
            component_type,
            output,
        }
    }
}
