//! livedoc — generate living documentation from an annotated symbol table.
//!
//! Reads a symbol-table snapshot exported by a language front end, selects
//! the declarations that are business-meaningful for the requested document
//! (glossary or architecture reference, optionally narrowed to one bounded
//! context or component type), and writes them as Markdown or AsciiDoc.

mod config;
mod filter;
mod i18n;
mod model;
mod provider;
mod render;
mod syntax;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Category, ComponentType, Language, RunConfig, Syntax};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "livedoc",
    about = "Generate living documentation (glossary / architecture reference) from an annotated symbol table"
)]
struct Cli {
    /// Symbol-table snapshot (JSON) exported by the language front end
    input: PathBuf,

    /// Document category
    #[arg(short = 'c', long, value_enum, default_value_t = Category::Glossary)]
    category: Category,

    /// Output markup syntax
    #[arg(short = 's', long, value_enum, default_value_t = Syntax::Markdown)]
    syntax: Syntax,

    /// Language for titles and headings
    #[arg(short = 'l', long, value_enum, default_value_t = Language::En)]
    language: Language,

    /// Restrict the glossary to one bounded context (exact name)
    #[arg(long)]
    context: Option<String>,

    /// Restrict the glossary to one component type
    #[arg(short = 't', long = "type", value_enum)]
    component_type: Option<ComponentType>,

    /// Output file (default: <category>.md or <category>.adoc)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = RunConfig::resolve(
        cli.category,
        cli.syntax,
        cli.language,
        cli.context,
        cli.component_type,
        cli.output,
    );
    run(&cli.input, &cfg)
}

/// One pass: load the snapshot, open the output, write the title, then
/// filter and render each declaration in provider order. The snapshot is
/// loaded before the output file is created so a bad input leaves no
/// half-written document behind.
fn run(input: &Path, cfg: &RunConfig) -> Result<()> {
    let declarations = provider::load(input)?;

    let file = File::create(&cfg.output)
        .with_context(|| format!("failed to create output file: {}", cfg.output.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", render::render_title(cfg))?;

    let profile = cfg.syntax.profile();
    for decl in &declarations {
        if filter::is_business_meaningful(decl, cfg) {
            out.write_all(render::render_declaration(decl, profile).as_bytes())?;
        }
    }

    out.flush()
        .with_context(|| format!("failed to write {}", cfg.output.display()))?;
    Ok(())
}
