//! Clause classification CLI
//!
//! Reads plain-text contracts and standard templates, classifies every
//! configured clause, and writes the results for the review dashboard.
//!
//! ```bash
//! clause-classify --contracts Contracts --templates "Standard Templates"
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use clause_core::config::EngineConfig;
use clause_core::document::load_text_documents;
use clause_core::pipeline::{Pipeline, TemplateConflictPolicy};
use clause_core::report::{self, SummaryReport};

#[derive(Parser)]
#[command(name = "clause-classify")]
#[command(version)]
#[command(about = "Classify contract clauses as Standard or Non-Standard against jurisdiction templates")]
struct Cli {
    /// Directory of contract text files
    #[arg(long, env = "CLAUSE_CONTRACTS_DIR", default_value = "Contracts")]
    contracts: PathBuf,

    /// Directory of standard template text files
    #[arg(long, env = "CLAUSE_TEMPLATES_DIR", default_value = "Standard Templates")]
    templates: PathBuf,

    /// Per-document results JSON
    #[arg(long, short = 'o', default_value = "classification_results.json")]
    output: PathBuf,

    /// Summary metrics JSON
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Engine configuration JSON (attributes, thresholds, naming)
    #[arg(long, env = "CLAUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Fail when two templates of a jurisdiction word a clause differently
    #[arg(long)]
    strict_templates: bool,

    /// Log every located and classified clause
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("clause-classify v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if cli.strict_templates {
        config.template_conflict = TemplateConflictPolicy::Reject;
    }

    for dir in [&cli.contracts, &cli.templates] {
        anyhow::ensure!(dir.is_dir(), "document directory not found: {}", dir.display());
    }

    let mut documents = load_text_documents(&cli.contracts, &config.naming)?;
    documents.extend(load_text_documents(&cli.templates, &config.naming)?);
    anyhow::ensure!(!documents.is_empty(), "no documents found");

    let pipeline = Pipeline::new(config)?;
    let run = pipeline.run(&documents)?;
    let summary = run.summary();

    print!("{}", report::render_summary(&summary));

    report::write_results(&run, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!("\nDetailed results saved to: {}", cli.output.display());

    if let Some(path) = &cli.summary {
        report::write_summary(&SummaryReport::new(summary), path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Summary saved to: {}", path.display());
    }

    Ok(())
}
