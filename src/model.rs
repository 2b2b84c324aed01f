//! Data model for a symbol-table snapshot — format-agnostic.
//!
//! Everything here is a read-only projection of what the language front end
//! exported: declarations, their members, and their attached metadata tags.
//! Tag kinds and namespaces are classified once at ingestion so the filter
//! and renderer never string-compare annotation names.

/// Namespace prefix for domain-design markers (entity, event, service,
/// feature, bounded context).
pub const DESIGN_NAMESPACE: &str = "livingdocumentation.design.";

/// Namespace prefix for structural/pattern markers (e.g. hexagonal adapter).
pub const ARCHITECTURE_NAMESPACE: &str = "livingdocumentation.architecture.";

/// A named program element (class, interface, or enum) from the snapshot.
#[derive(Debug, Default)]
pub struct Declaration {
    pub name: String,
    /// Declaration-level comment, verbatim. Empty means undocumented.
    pub comment: String,
    /// Attached metadata tags, in declaration order. May hold several tags
    /// of the same kind (e.g. multiple `Feature` markers).
    pub tags: Vec<Tag>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub enum_constants: Vec<EnumConstant>,
    pub is_enum: bool,
    pub is_interface: bool,
}

impl Declaration {
    /// True when at least one tag falls in the given namespace.
    pub fn has_tag_in(&self, namespace: TagNamespace) -> bool {
        self.tags.iter().any(|t| t.namespace == namespace)
    }
}

/// One attached domain marker.
#[derive(Debug)]
pub struct Tag {
    /// Namespace-qualified marker name, e.g.
    /// `livingdocumentation.design.BoundedContext`.
    pub qualified_name: String,
    pub kind: TagKind,
    pub namespace: TagNamespace,
    /// Marker parameters, in declaration order.
    pub params: Vec<TagParam>,
}

impl Tag {
    /// Classify a marker by its qualified name. Kind and namespace are
    /// fixed for the lifetime of the tag.
    pub fn new(qualified_name: String, params: Vec<TagParam>) -> Self {
        let kind = TagKind::from_simple_name(simple_name(&qualified_name));
        let namespace = TagNamespace::of(&qualified_name);
        Tag {
            qualified_name,
            kind,
            namespace,
            params,
        }
    }

    /// Last segment of the qualified name.
    #[allow(dead_code)]
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    /// Parameter value by name. Absent parameters are absent, not defaulted.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// One (name, value) marker parameter.
#[derive(Debug)]
pub struct TagParam {
    pub name: String,
    pub value: String,
}

/// Closed set of marker kinds the pipeline reacts to. Everything else is
/// `Other` and only participates in namespace-based filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    BoundedContext,
    Entity,
    Event,
    Service,
    Feature,
    Other,
}

impl TagKind {
    fn from_simple_name(name: &str) -> TagKind {
        match name {
            "BoundedContext" => TagKind::BoundedContext,
            "Entity" => TagKind::Entity,
            "Event" => TagKind::Event,
            "Service" => TagKind::Service,
            "Feature" => TagKind::Feature,
            _ => TagKind::Other,
        }
    }

    /// Display name used in rendered blocks. `Other` kinds are never printed.
    pub fn label(self) -> &'static str {
        match self {
            TagKind::BoundedContext => "BoundedContext",
            TagKind::Entity => "Entity",
            TagKind::Event => "Event",
            TagKind::Service => "Service",
            TagKind::Feature => "Feature",
            TagKind::Other => "",
        }
    }
}

/// Which marker namespace a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagNamespace {
    Design,
    Architecture,
    Other,
}

impl TagNamespace {
    fn of(qualified_name: &str) -> TagNamespace {
        if qualified_name.starts_with(DESIGN_NAMESPACE) {
            TagNamespace::Design
        } else if qualified_name.starts_with(ARCHITECTURE_NAMESPACE) {
            TagNamespace::Architecture
        } else {
            TagNamespace::Other
        }
    }
}

/// A field member.
#[derive(Debug, Default)]
pub struct Field {
    pub name: String,
    /// Fully qualified type name, printed as-is.
    pub type_name: String,
    pub is_public: bool,
    pub comment: String,
}

/// A method member.
#[derive(Debug, Default)]
pub struct Method {
    pub name: String,
    /// Flat parameter signature including parentheses, e.g. `(double)`.
    pub signature: String,
    /// Simple name of the return type.
    pub return_type: String,
    pub is_public: bool,
    pub comment: String,
}

/// An enum constant member.
/// Carried through the pipeline but not rendered yet (see `render`).
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct EnumConstant {
    pub name: String,
    pub is_public: bool,
    pub comment: String,
}

/// A member is documented when its comment has non-whitespace content.
pub fn is_documented(comment: &str) -> bool {
    !comment.trim().is_empty()
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(qualified: &str) -> Tag {
        Tag::new(qualified.to_string(), Vec::new())
    }

    #[test]
    fn kind_classified_from_simple_name() {
        assert_eq!(
            tag("livingdocumentation.design.BoundedContext").kind,
            TagKind::BoundedContext
        );
        assert_eq!(tag("livingdocumentation.design.Entity").kind, TagKind::Entity);
        assert_eq!(
            tag("livingdocumentation.architecture.HexagonalAdapter").kind,
            TagKind::Other
        );
    }

    #[test]
    fn namespace_classified_from_prefix() {
        assert_eq!(
            tag("livingdocumentation.design.Event").namespace,
            TagNamespace::Design
        );
        assert_eq!(
            tag("livingdocumentation.architecture.HexagonalAdapter").namespace,
            TagNamespace::Architecture
        );
        assert_eq!(tag("com.vendor.Deprecated").namespace, TagNamespace::Other);
    }

    #[test]
    fn simple_name_is_last_segment() {
        assert_eq!(tag("livingdocumentation.design.Feature").simple_name(), "Feature");
        assert_eq!(tag("Unqualified").simple_name(), "Unqualified");
    }

    #[test]
    fn param_lookup_absent_is_none() {
        let t = Tag::new(
            "livingdocumentation.design.BoundedContext".to_string(),
            vec![TagParam {
                name: "name".to_string(),
                value: "Billing".to_string(),
            }],
        );
        assert_eq!(t.param("name"), Some("Billing"));
        assert_eq!(t.param("scope"), None);
    }

    #[test]
    fn documented_requires_non_blank_text() {
        assert!(is_documented("Total amount"));
        assert!(!is_documented(""));
        assert!(!is_documented("   \n\t"));
    }
}
