//! Document renderer.
//!
//! Turns one included declaration into an ordered sequence of text blocks:
//! title, bounded-context lines, domain-type lines, feature lines, then the
//! member listing. Non-empty blocks are separated by a horizontal rule.
//! Every decision that depends on the output dialect goes through the
//! syntax profile's tokens; the block structure is identical across
//! dialects. Missing optional data renders as nothing, never a placeholder.

use crate::config::{Category, RunConfig};
use crate::i18n::translate;
use crate::model::{is_documented, Declaration, EnumConstant, Field, Method, TagKind};
use crate::syntax::SyntaxProfile;

/// Document title line, without trailing newline.
///
/// Glossary titles carry the context and component-type restrictions as
/// suffixes so a filtered document says what it was filtered by.
pub fn render_title(cfg: &RunConfig) -> String {
    let profile = cfg.syntax.profile();
    let mut title = format!(
        "{}{}",
        profile.h1,
        translate(cfg.category.key(), cfg.language)
    );
    if cfg.category == Category::Glossary {
        if let Some(ref context) = cfg.context {
            title.push_str(": ");
            title.push_str(&translate(context, cfg.language));
        }
        if let Some(component_type) = cfg.component_type {
            title.push_str(": ");
            title.push_str(&translate(component_type.key(), cfg.language));
        }
    }
    title
}

/// Render all blocks for one declaration.
pub fn render_declaration(decl: &Declaration, profile: &SyntaxProfile) -> String {
    let mut out = String::new();

    // Title block: heading with emphasized name, then the declaration
    // comment verbatim (empty stays empty).
    out.push('\n');
    out.push_str(profile.h2);
    out.push_str(profile.emphasis);
    out.push_str(&decl.name);
    out.push_str(profile.emphasis);
    out.push('\n');
    out.push_str(&decl.comment);
    out.push('\n');
    out.push('\n');
    push_separator(&mut out, profile);

    push_contexts(&mut out, decl, profile);
    push_domain_types(&mut out, decl, profile);
    push_features(&mut out, decl, profile);

    if decl.is_enum {
        push_enum_constants(&mut out, &decl.enum_constants, profile);
        push_methods(&mut out, &decl.methods, profile);
    } else if decl.is_interface {
        // Interface members are reserved for a future extension.
    } else {
        push_fields(&mut out, &decl.fields, profile);
        push_methods(&mut out, &decl.methods, profile);
    }

    out
}

fn push_separator(out: &mut String, profile: &SyntaxProfile) {
    out.push('\n');
    out.push_str(profile.hr);
    out.push_str("\n\n");
}

/// One line per BoundedContext tag; the `name` parameter, when present, is
/// appended after a colon.
fn push_contexts(out: &mut String, decl: &Declaration, profile: &SyntaxProfile) {
    let mut found = false;
    for tag in decl.tags.iter().filter(|t| t.kind == TagKind::BoundedContext) {
        found = true;
        out.push_str(tag.kind.label());
        if let Some(name) = tag.param("name") {
            out.push_str(": ");
            out.push_str(name);
        }
        out.push('\n');
    }
    if found {
        push_separator(out, profile);
    }
}

/// `Type: <Kind>` line per Entity/Event/Service tag.
fn push_domain_types(out: &mut String, decl: &Declaration, profile: &SyntaxProfile) {
    let mut found = false;
    for tag in &decl.tags {
        if matches!(tag.kind, TagKind::Entity | TagKind::Event | TagKind::Service) {
            found = true;
            out.push_str("Type: ");
            out.push_str(tag.kind.label());
            out.push('\n');
        }
    }
    if found {
        push_separator(out, profile);
    }
}

/// One line per Feature tag, each with its optional name.
fn push_features(out: &mut String, decl: &Declaration, profile: &SyntaxProfile) {
    let mut found = false;
    for tag in decl.tags.iter().filter(|t| t.kind == TagKind::Feature) {
        found = true;
        out.push_str(tag.kind.label());
        if let Some(name) = tag.param("name") {
            out.push_str(": ");
            out.push_str(name);
        }
        out.push('\n');
    }
    if found {
        push_separator(out, profile);
    }
}

/// Public documented fields as a bulleted list, then a separator.
fn push_fields(out: &mut String, fields: &[Field], profile: &SyntaxProfile) {
    let mut found = false;
    for field in fields {
        if field.is_public && is_documented(&field.comment) {
            found = true;
            out.push_str(profile.list_item);
            out.push_str(&field.name);
            out.push_str(": ");
            out.push_str(&field.type_name);
            out.push(' ');
            out.push_str(&field.comment);
            out.push('\n');
        }
    }
    if found {
        push_separator(out, profile);
    }
}

/// Public documented methods: bulleted signature line, blank line, then the
/// comment indented four spaces. Non-qualifying methods are skipped without
/// stopping the scan. No separator follows the method block.
fn push_methods(out: &mut String, methods: &[Method], profile: &SyntaxProfile) {
    for method in methods {
        if !method.is_public || !is_documented(&method.comment) {
            continue;
        }
        out.push_str(profile.list_item);
        out.push_str(&method.name);
        out.push_str(&method.signature);
        out.push_str(": ");
        out.push_str(&method.return_type);
        out.push_str("\n\n    ");
        out.push_str(&method.comment);
        out.push('\n');
    }
}

/// Enum constants are recognized but deliberately emit nothing yet.
/// TODO: emit a constant listing once a rendered form for constants is
/// settled; the qualification rule will be public + documented, like fields.
fn push_enum_constants(
    _out: &mut String,
    _constants: &[EnumConstant],
    _profile: &SyntaxProfile,
) {
}
