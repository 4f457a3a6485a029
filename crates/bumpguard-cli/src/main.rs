//! CLI entry point for bumpguard.
//!
//! Handles argument parsing, I/O, logging setup and exit codes. Business logic lives in the
//! `bumpguard-app` crate.

use anyhow::Context;
use bumpguard_app::{
    format_lookup, parse_kind, parse_report_json, render_annotations, render_markdown, run_check,
    run_lookup, runtime_error_report, serialize_report, verdict_exit_code, CheckInput,
    LookupInput,
};
use bumpguard_settings::{ConfigFormat, Overrides};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bumpguard",
    version,
    about = "Version-update restriction rules for dependency updates"
)]
struct Cli {
    /// Path to the rules config (JSON, or TOML by extension). A missing file means no rules.
    #[arg(long, default_value = "bumpguard.json")]
    config: Utf8PathBuf,

    /// Override finding severity (info|warning|error).
    #[arg(long)]
    severity: Option<String>,

    /// Override when to fail (error|warning).
    #[arg(long)]
    fail_on: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report dependencies whose version does not match their PREFIX rule.
    Check {
        /// JSON array of dependencies: groupId, artifactId, version, scope.
        #[arg(long)]
        deps: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/bumpguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/bumpguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Show the restrictions that apply to a `group:artifact` coordinate.
    Lookup {
        coordinate: String,

        /// Only show the first restriction of this kind (never|ignore|qualifier|prefix|stream).
        #[arg(long)]
        kind: Option<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        #[arg(long, default_value = "artifacts/bumpguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        #[arg(long, default_value = "artifacts/bumpguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the JSON Schema of the config document.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Check {
            deps,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(&cli, deps, report_out, *write_markdown, markdown_out),
        Commands::Lookup { coordinate, kind } => cmd_lookup(&cli, coordinate, kind.as_deref()),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Schema => cmd_schema(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the config file; a missing file yields empty text (defaults apply).
fn read_config(cli: &Cli) -> anyhow::Result<(String, ConfigFormat)> {
    let format = ConfigFormat::from_extension(cli.config.extension());
    if !cli.config.exists() {
        tracing::debug!(path = %cli.config, "config not found; using defaults");
        return Ok((String::new(), format));
    }
    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("read config: {}", cli.config))?;
    Ok((text, format))
}

fn cmd_check(
    cli: &Cli,
    deps: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let (config_text, config_format) = read_config(cli)?;
        let deps_text = std::fs::read_to_string(deps)
            .with_context(|| format!("read dependencies: {}", deps))?;

        let output = run_check(CheckInput {
            config_text: &config_text,
            config_format,
            dependencies_text: &deps_text,
            overrides: Overrides {
                severity: cli.severity.clone(),
                fail_on: cli.fail_on.clone(),
                max_findings: cli.max_findings,
            },
        })?;

        write_report_file(report_out, &serialize_report(&output.report)?)
            .context("write report json")?;

        if write_markdown {
            let md = render_markdown(&output.report);
            write_report_file(markdown_out, md.as_bytes()).context("write markdown")?;
        }

        tracing::info!(
            verdict = ?output.report.verdict,
            findings = output.report.findings.len(),
            "check finished"
        );
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Ok(bytes) = serialize_report(&report) {
                let _ = write_report_file(report_out, &bytes);
            }
            eprintln!("bumpguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_lookup(cli: &Cli, coordinate: &str, kind: Option<&str>) -> anyhow::Result<()> {
    let (config_text, config_format) = read_config(cli)?;
    let kind = kind.map(parse_kind).transpose()?;

    let output = run_lookup(LookupInput {
        config_text: &config_text,
        config_format,
        coordinate,
        kind,
    })?;

    print!("{}", format_lookup(&output));
    Ok(())
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_report_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = bumpguard_settings::config_schema();
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("serialize schema")?
    );
    Ok(())
}
