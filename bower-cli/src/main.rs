//! Bower CLI
//!
//! Renders HTML from JSON element manifests, with debugging views of the
//! built element tree.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bower_markup::{Content, Element};
use clap::Parser;
use owo_colors::OwoColorize;

/// Render HTML from a JSON element manifest.
#[derive(Parser)]
#[command(name = "bower", version, about)]
struct Cli {
    /// Path to a JSON manifest file.
    #[arg(value_name = "MANIFEST", required_unless_present = "inline")]
    manifest: Option<PathBuf>,

    /// Inline JSON manifest text instead of a file.
    #[arg(long, value_name = "JSON", conflicts_with = "manifest")]
    inline: Option<String>,

    /// Print an indented outline of the built tree instead of HTML.
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print the built tree as pretty JSON instead of HTML.
    #[arg(long)]
    json: bool,

    /// Write the output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let manifest = if let Some(path) = &cli.manifest {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest '{}'", path.display()))?
    } else if let Some(inline) = &cli.inline {
        inline.clone()
    } else {
        bail!("provide a manifest file or --inline JSON");
    };

    let element = bower_manifest::from_str(&manifest).context("failed to decode manifest")?;

    let rendered = if cli.tree {
        let mut lines = Vec::new();
        outline(&element, 0, &mut lines);
        lines.join("\n")
    } else if cli.json {
        serde_json::to_string_pretty(&element).context("failed to serialize the tree")?
    } else {
        element.to_html().context("failed to render the manifest")?
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Append an indented outline of `element` to `lines`, one line per node.
///
/// Tags are printed in color with a dimmed attribute count; text nodes are
/// printed quoted. Unnamed elements show up as `<?>`.
fn outline(element: &Element, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    let name = element.name().unwrap_or("?");
    let count = element.attributes().len();

    let line = if count == 0 {
        format!("{pad}<{}>", name.cyan())
    } else {
        let noun = if count == 1 { "attribute" } else { "attributes" };
        let summary = format!("({count} {noun})");
        format!("{pad}<{}> {}", name.cyan(), summary.dimmed())
    };
    lines.push(line);

    for node in element.content() {
        match node {
            Content::Text(text) => lines.push(format!("{pad}  {text:?}")),
            Content::Child(child) => outline(child, depth + 1, lines),
        }
    }
}
