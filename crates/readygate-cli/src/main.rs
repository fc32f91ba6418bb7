//! CLI entry point for readygate.
//!
//! This module is intentionally thin: it handles argument parsing, file and
//! stdin I/O, and exit codes. All business logic lives in the
//! `readygate-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use readygate_app::{
    format_explanation, format_not_found, run_analyze, run_explain, AnalyzeInput, ExplainOutput,
    MetadataInput,
};
use readygate_render::render_markdown;
use readygate_store::JsonFileStore;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(
    name = "readygate",
    version,
    about = "Deterministic backend readiness scoring from schema, auth, and function metadata"
)]
struct Cli {
    /// Path to the JSON report store.
    #[arg(long, default_value = "reports/reports.json")]
    store: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze backend metadata and store a readiness report.
    Analyze {
        /// Human-readable label for the analyzed project.
        #[arg(long)]
        label: String,

        /// InsForge deployment base URL (fetch mode; needs --api-key).
        #[arg(long, requires = "api_key", conflicts_with = "metadata")]
        base_url: Option<String>,

        /// InsForge API key.
        #[arg(long, requires = "base_url")]
        api_key: Option<String>,

        /// Path to a metadata JSON file, or `-` for stdin (manual mode).
        #[arg(long, conflicts_with_all = ["base_url", "api_key"])]
        metadata: Option<Utf8PathBuf>,

        /// Emit the analysis result as JSON on stdout.
        #[arg(long)]
        json: bool,
    },

    /// Print a stored report.
    Report {
        /// Slug returned by a previous analyze run.
        slug: String,

        /// Output format (md or json).
        #[arg(long, default_value = "md")]
        format: String,
    },

    /// Print the canonical sample metadata as JSON.
    Sample,

    /// Explain a check id with remediation guidance.
    Explain {
        /// The check id (e.g. "schema.missing_primary_key") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = JsonFileStore::new(cli.store.clone());

    match cli.cmd {
        Commands::Analyze {
            label,
            base_url,
            api_key,
            metadata,
            json,
        } => cmd_analyze(&store, label, base_url, api_key, metadata, json),
        Commands::Report { slug, format } => cmd_report(&store, &slug, &format),
        Commands::Sample => cmd_sample(),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_analyze(
    store: &JsonFileStore,
    label: String,
    base_url: Option<String>,
    api_key: Option<String>,
    metadata: Option<Utf8PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let metadata_input = match (base_url, api_key, metadata) {
        (Some(base_url), Some(api_key), None) => MetadataInput::Insforge { base_url, api_key },
        (None, None, Some(path)) => MetadataInput::Manual {
            metadata_json: read_metadata_text(&path)?,
        },
        _ => anyhow::bail!("either --base-url with --api-key, or --metadata, is required"),
    };

    let output = run_analyze(
        AnalyzeInput {
            project_label: label,
            metadata: metadata_input,
        },
        store,
    )?;

    if json {
        let value = serde_json::json!({
            "slug": output.slug,
            "score": output.score,
            "summary": output.summary,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "report {} stored: score {}/100 ({} high / {} medium / {} low)",
            output.slug,
            output.score,
            output.summary.high,
            output.summary.medium,
            output.summary.low
        );
    }

    Ok(())
}

fn read_metadata_text(path: &Utf8PathBuf) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read metadata from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read metadata file: {path}"))
    }
}

fn cmd_report(store: &JsonFileStore, slug: &str, format: &str) -> anyhow::Result<()> {
    let Some(report) = readygate_app::fetch_report(store, slug)? else {
        eprintln!("report not found: {slug}");
        std::process::exit(1);
    };

    match format {
        "md" => print!("{}", render_markdown(&report)),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => anyhow::bail!("unknown format: {other} (expected md or json)"),
    }

    Ok(())
}

fn cmd_sample() -> anyhow::Result<()> {
    let sample = readygate_types::sample_metadata();
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_check_ids));
            std::process::exit(1);
        }
    }
}
