//! Meaningfulness filter — decides which declarations belong in a document.
//!
//! Architecture documents take anything carrying an architecture-namespaced
//! marker. Glossary documents take anything carrying a design-namespaced
//! marker, optionally narrowed to one bounded context (exact name match) or
//! one component type. The filter only answers yes/no; it never fails.

use crate::config::{Category, RunConfig};
use crate::model::{Declaration, TagKind, TagNamespace};

/// True when `decl` belongs in the document described by `cfg`.
pub fn is_business_meaningful(decl: &Declaration, cfg: &RunConfig) -> bool {
    match cfg.category {
        Category::Architecture => decl.has_tag_in(TagNamespace::Architecture),
        Category::Glossary => {
            if !decl.has_tag_in(TagNamespace::Design) {
                return false;
            }
            if let Some(context) = cfg.context.as_deref() {
                // Exact, case-sensitive match on the BoundedContext name.
                // The whole tag set is scanned; a design tag alone is not
                // enough once a context restriction is in play.
                decl.tags.iter().any(|t| {
                    t.namespace == TagNamespace::Design
                        && t.kind == TagKind::BoundedContext
                        && t.param("name") == Some(context)
                })
            } else if let Some(component_type) = cfg.component_type {
                decl.tags.iter().any(|t| t.kind == component_type.tag_kind())
            } else {
                true
            }
        }
    }
}
