use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rampart::{
    Catalog, ImpactLevel, Report, ScanConfig, ScanEngine, ScanScheduler, Severity, Standard,
};

#[derive(Parser)]
#[command(
    name = "rampart",
    about = "Compliance and security scanner for infrastructure and source files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a workspace once and print the report
    Scan {
        /// Workspace root to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config file path (defaults to <path>/.rampart.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long, short = 'f', default_value = "text")]
        format: String,

        /// Standards to evaluate (overrides config)
        #[arg(long)]
        standard: Vec<String>,

        /// FedRAMP impact level (Low, Moderate, High)
        #[arg(long)]
        level: Option<String>,

        /// Skip the security vulnerability pass
        #[arg(long)]
        no_security: bool,
    },

    /// Watch a workspace and rescan files as they change
    Watch {
        /// Workspace root to watch
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config file path (defaults to <path>/.rampart.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// List all controls in the catalog
    ListControls {
        /// Restrict to one standard
        #[arg(long)]
        standard: Option<String>,
    },

    /// Generate a starter .rampart.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            path,
            config,
            format,
            standard,
            level,
            no_security,
        } => cmd_scan(path, config, format, standard, level, no_security).await,
        Commands::Watch { path, config } => cmd_watch(path, config).await,
        Commands::ListControls { standard } => cmd_list_controls(standard),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(2);
        }
    }
}

fn load_config(root: &std::path::Path, config_path: Option<PathBuf>) -> anyhow::Result<ScanConfig> {
    let path = config_path.unwrap_or_else(|| root.join(".rampart.toml"));
    ScanConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))
}

async fn cmd_scan(
    path: PathBuf,
    config_path: Option<PathBuf>,
    format: String,
    standards: Vec<String>,
    level: Option<String>,
    no_security: bool,
) -> anyhow::Result<i32> {
    let mut config = load_config(&path, config_path)?;

    if !standards.is_empty() {
        config.standards = standards
            .iter()
            .filter_map(|name| {
                let parsed = Standard::from_str(name);
                if parsed.is_none() {
                    eprintln!("Warning: unknown standard '{}', skipping", name);
                }
                parsed
            })
            .collect();
    }
    if let Some(level) = level {
        config.level = ImpactLevel::from_str(&level)
            .ok_or_else(|| anyhow::anyhow!("unknown impact level '{}'", level))?;
    }
    if no_security {
        config.security_scan_enabled = false;
    }

    let report = rampart::scan_workspace(&path, config).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_report(&report),
    }

    Ok(if report.summary.errors > 0 { 1 } else { 0 })
}

async fn cmd_watch(path: PathBuf, config_path: Option<PathBuf>) -> anyhow::Result<i32> {
    let config = load_config(&path, config_path)?;

    let engine = ScanEngine::new(Catalog::load()?);
    let scheduler = ScanScheduler::new(engine, config);
    let reports = scheduler.subscribe();

    let report = scheduler.scan_workspace(&path).await?;
    print_report(&report);

    let watcher = rampart::FileWatcher::new()
        .watch_directory(&path)
        .await?;

    println!("Watching {} (ctrl-c to stop)", path.display());
    loop {
        tokio::select! {
            event = watcher.recv() => {
                match event {
                    Some(event) => scheduler.handle_event(event).await,
                    None => break,
                }
            }
            report = reports.recv() => {
                if let Ok(report) = report {
                    println!(
                        "[{}] {} issues ({} errors, {} warnings, {} info), {}/{} controls covered",
                        report.timestamp,
                        report.issues.len(),
                        report.summary.errors,
                        report.summary.warnings,
                        report.summary.info,
                        report.summary.controls_covered,
                        report.summary.total_controls,
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(0)
}

fn cmd_list_controls(standard: Option<String>) -> anyhow::Result<i32> {
    let catalog = Catalog::load()?;

    let standards: Vec<Standard> = match standard {
        Some(name) => vec![Standard::from_str(&name)
            .ok_or_else(|| anyhow::anyhow!("unknown standard '{}'", name))?],
        None => Standard::all().to_vec(),
    };

    println!(
        "{:<16} {:<10} {:<6} {:<9} TITLE",
        "ID", "STANDARD", "FAMILY", "SEVERITY"
    );
    println!("{}", "-".repeat(80));
    for standard in standards {
        for control in catalog.controls_for(standard) {
            println!(
                "{:<16} {:<10} {:<6} {:<9} {}",
                control.id,
                control.standard.as_str(),
                control.family.code(),
                control.severity.as_str(),
                control.title,
            );
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> anyhow::Result<i32> {
    let path = PathBuf::from(".rampart.toml");

    if path.exists() && !force {
        eprintln!(".rampart.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, ScanConfig::starter_toml())?;
    println!("Created .rampart.toml");

    Ok(0)
}

fn print_report(report: &Report) {
    println!(
        "Scanned {}/{} files against {}",
        report.scanned_files,
        report.total_files,
        report
            .standards
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    println!(
        "{} issues: {} errors, {} warnings, {} info",
        report.issues.len(),
        report.summary.errors,
        report.summary.warnings,
        report.summary.info,
    );
    println!(
        "Controls covered: {}/{}",
        report.summary.controls_covered, report.summary.total_controls
    );

    for issue in &report.issues {
        let marker = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        println!(
            "{}:{}:{}: [{}] {}: {}",
            issue.file, issue.line, issue.column, marker, issue.control, issue.message
        );
    }
}
