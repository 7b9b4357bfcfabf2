//! `lineage` CLI — show where a node sits inside a JSON document.
//!
//! ## Usage
//!
//! ```sh
//! # Ancestors of the value at /a/b (stdin → stdout)
//! echo '{"a":{"b":1}}' | lineage find /a/b
//!
//! # Ancestors of the property "b" itself, as JSON
//! lineage find /a/b --property --format json -i doc.json
//!
//! # Node counts and nesting depth
//! lineage stats -i doc.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lineage_core::{
    find_lineage, pointer_from_lineage, resolve, resolve_property, Container, Node, NodeKind,
    TreeStats, Value,
};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lineage",
    version,
    about = "Locate a JSON node's container ancestors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ancestors of the node named by a JSON Pointer, root first
    Find {
        /// RFC 6901 JSON Pointer of the target node ("" is the document root)
        pointer: String,
        /// Target the property whose value the pointer names, not the value
        #[arg(long)]
        property: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show node counts per kind and the maximum nesting depth
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One ancestor in `find --format json` output.
#[derive(Serialize)]
struct AncestorReport {
    depth: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    pointer: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            pointer,
            property,
            format,
            input,
            output,
        } => {
            let json = read_input(input.as_deref())?;
            let root = Value::from_json_str(&json).context("Failed to parse input JSON")?;

            let target = select_target(&root, &pointer, property)?;
            tracing::debug!(pointer = %pointer, kind = %target.kind(), "selected target");

            let lineage = find_lineage(&root, target)
                .context("Selected node is missing from its own document")?;
            let reports = ancestor_reports(&lineage);

            let rendered = match format {
                Format::Text => render_text(&reports)?,
                Format::Json => {
                    let mut out = serde_json::to_string_pretty(&reports)?;
                    out.push('\n');
                    out
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let root = Value::from_json_str(&json).context("Failed to parse input JSON")?;
            let stats = TreeStats::collect(&root);

            for kind in [
                NodeKind::Object,
                NodeKind::Array,
                NodeKind::Property,
                NodeKind::String,
                NodeKind::Number,
                NodeKind::Boolean,
                NodeKind::Null,
            ] {
                println!("{:<10} {}", format!("{kind}:"), stats.count(kind));
            }
            println!("{:<10} {}", "total:", stats.total());
            println!("{:<10} {}", "depth:", stats.max_depth);
        }
    }

    Ok(())
}

/// Resolve the pointer to the target node, or to its property with `--property`.
fn select_target<'a>(root: &'a Value, pointer: &str, property: bool) -> Result<Node<'a>> {
    let target = if property {
        resolve_property(root, pointer)
            .with_context(|| format!("Invalid pointer: '{}'", pointer))?
            .map(Node::Property)
    } else {
        resolve(root, pointer).with_context(|| format!("Invalid pointer: '{}'", pointer))?
    };
    match target {
        Some(node) => Ok(node),
        None if property => anyhow::bail!("no property at pointer '{}'", pointer),
        None => anyhow::bail!("no node at pointer '{}'", pointer),
    }
}

/// One report per ancestor, each carrying that ancestor's own pointer.
fn ancestor_reports(lineage: &[Container<'_>]) -> Vec<AncestorReport> {
    lineage
        .iter()
        .enumerate()
        .map(|(depth, container)| AncestorReport {
            depth,
            kind: container.kind().as_str(),
            key: container.as_property().map(|p| p.key().to_string()),
            pointer: pointer_from_lineage(&lineage[..depth], (*container).into()),
        })
        .collect()
}

fn render_text(reports: &[AncestorReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        let label = match &report.key {
            Some(key) => format!("{} {}", report.kind, serde_json::to_string(key)?),
            None => report.kind.to_string(),
        };
        let pointer = if report.pointer.is_empty() {
            "(root)"
        } else {
            report.pointer.as_str()
        };
        out.push_str(&format!("{}\t{}\n", label, pointer));
    }
    Ok(out)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
