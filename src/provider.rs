//! Symbol-table snapshot ingestion.
//!
//! The language front end is a separate tool; its interface boundary is a
//! JSON snapshot of the declarations it saw. Raw records are deserialized
//! here and mapped once into the typed model — tag kind and namespace
//! classification happen at this boundary, nowhere else.

use crate::model::{Declaration, EnumConstant, Field, Method, Tag, TagParam};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct SnapshotRecord {
    declarations: Vec<DeclarationRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeclarationRecord {
    name: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    tags: Vec<TagRecord>,
    #[serde(default)]
    fields: Vec<FieldRecord>,
    #[serde(default)]
    methods: Vec<MethodRecord>,
    #[serde(default)]
    enum_constants: Vec<EnumConstantRecord>,
    #[serde(default)]
    is_enum: bool,
    #[serde(default)]
    is_interface: bool,
}

#[derive(Deserialize)]
struct TagRecord {
    /// Namespace-qualified marker name.
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    params: Vec<TagParamRecord>,
}

#[derive(Deserialize)]
struct TagParamRecord {
    name: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRecord {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    public: bool,
    #[serde(default)]
    comment: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MethodRecord {
    name: String,
    #[serde(default)]
    signature: String,
    #[serde(default)]
    return_type: String,
    #[serde(default)]
    public: bool,
    #[serde(default)]
    comment: String,
}

#[derive(Deserialize)]
struct EnumConstantRecord {
    name: String,
    #[serde(default)]
    public: bool,
    #[serde(default)]
    comment: String,
}

/// Load a snapshot file into model declarations, in file order.
pub fn load(path: &Path) -> Result<Vec<Declaration>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read symbol table: {}", path.display()))?;
    parse(&content).with_context(|| format!("invalid symbol table: {}", path.display()))
}

fn parse(content: &str) -> Result<Vec<Declaration>> {
    let snapshot: SnapshotRecord = serde_json::from_str(content)?;
    Ok(snapshot
        .declarations
        .into_iter()
        .map(into_declaration)
        .collect())
}

fn into_declaration(record: DeclarationRecord) -> Declaration {
    Declaration {
        name: record.name,
        comment: record.comment,
        tags: record
            .tags
            .into_iter()
            .map(|t| {
                Tag::new(
                    t.type_name,
                    t.params
                        .into_iter()
                        .map(|p| TagParam {
                            name: p.name,
                            value: p.value,
                        })
                        .collect(),
                )
            })
            .collect(),
        fields: record
            .fields
            .into_iter()
            .map(|f| Field {
                name: f.name,
                type_name: f.type_name,
                is_public: f.public,
                comment: f.comment,
            })
            .collect(),
        methods: record
            .methods
            .into_iter()
            .map(|m| Method {
                name: m.name,
                signature: m.signature,
                return_type: m.return_type,
                is_public: m.public,
                comment: m.comment,
            })
            .collect(),
        enum_constants: record
            .enum_constants
            .into_iter()
            .map(|c| EnumConstant {
                name: c.name,
                is_public: c.public,
                comment: c.comment,
            })
            .collect(),
        is_enum: record.is_enum,
        is_interface: record.is_interface,
    }
}
