//! Command-line interface.
//!
//! Every command loads a designer from the configuration, optionally swaps in
//! a template read from a JSON file, and writes its document to `--out` or to
//! the supplied writer.

use crate::{designer_from_config, ArtifactKind, Config, DesignerState, FileSink, Template};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "labelkit", version, about = "Design and print perishable-goods labels and slips")]
pub struct Cli {
    /// Configuration file (.toml or .json). Defaults to the platform config dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the editor view of a template as SVG
    Render {
        #[command(flatten)]
        source: TemplateSource,
        /// Field to draw as selected
        #[arg(long)]
        select: Option<String>,
        /// Zoom level (0.5 to 2.0)
        #[arg(long)]
        zoom: Option<f64>,
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Render the preview grid of N copies as SVG
    Preview {
        #[command(flatten)]
        source: TemplateSource,
        #[arg(long, short)]
        quantity: Option<usize>,
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Write the printable HTML document of N copies
    Print {
        #[command(flatten)]
        source: TemplateSource,
        #[arg(long, short)]
        quantity: Option<usize>,
        /// Defaults to `<print.output_dir>/<template id>.html`
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// List the data catalog
    Catalog {
        /// Case-insensitive filter on entry label or id
        #[arg(long, short)]
        search: Option<String>,
        /// Template whose bound entries are marked
        #[command(flatten)]
        source: TemplateSource,
    },
}

#[derive(Debug, Clone, Args)]
pub struct TemplateSource {
    /// label, slip (delivery-slip) or bill (packing-slip)
    #[arg(long, short)]
    pub artifact: Option<ArtifactKind>,
    /// Template JSON file; replaces the artifact's default template
    #[arg(long, short)]
    pub template: Option<PathBuf>,
}

impl TemplateSource {
    fn designer(&self, config: &Config) -> anyhow::Result<DesignerState> {
        let mut designer = designer_from_config(config, self.artifact)?;
        if let Some(path) = &self.template {
            designer.load_template(read_template(path)?)?;
        }
        Ok(designer)
    }
}

fn read_template(path: &Path) -> anyhow::Result<Template> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))?;
    Template::from_json(&content).with_context(|| format!("Invalid template {}", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    Ok(config)
}

fn emit(document: &str, out: Option<&Path>, stdout: &mut dyn Write) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => writeln!(stdout, "{document}")?,
    }
    Ok(())
}

/// Executes a parsed command line, writing document output to `stdout`.
pub fn run(cli: Cli, stdout: &mut dyn Write) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            source,
            select,
            zoom,
            out,
        } => {
            let mut designer = source.designer(&config)?;
            if let Some(zoom) = zoom {
                designer.set_zoom(zoom);
            }
            if let Some(id) = select {
                designer.select(&id)?;
            }
            emit(&designer.render_editor(), out.as_deref(), stdout)
        }
        Command::Preview {
            source,
            quantity,
            out,
        } => {
            let mut designer = source.designer(&config)?;
            if let Some(quantity) = quantity {
                designer.set_quantity(quantity);
            }
            emit(&designer.render_preview(), out.as_deref(), stdout)
        }
        Command::Print {
            source,
            quantity,
            out,
        } => {
            let mut designer = source.designer(&config)?;
            if let Some(quantity) = quantity {
                designer.set_quantity(quantity);
            }
            let path =
                out.unwrap_or_else(|| config.print.document_path(&designer.template().id));
            let mut sink = FileSink::new(&path);
            let document = designer.print(&mut sink)?;
            writeln!(
                stdout,
                "{} copies of '{}' -> {}",
                document.copies,
                designer.template().name,
                path.display()
            )?;
            Ok(())
        }
        Command::Catalog { search, source } => {
            let mut designer = source.designer(&config)?;
            if let Some(query) = search {
                designer.set_search_query(query);
            }
            for category in designer.filtered_catalog() {
                writeln!(stdout, "{}", category.name)?;
                for entry in category.entries {
                    let marker = if designer.is_bound(entry) { "*" } else { " " };
                    writeln!(
                        stdout,
                        "  {} {:<18} {:<8} {}",
                        marker,
                        entry.id,
                        entry.kind.as_str(),
                        entry.label
                    )?;
                }
            }
            Ok(())
        }
    }
}
