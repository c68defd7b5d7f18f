//! windcfg CLI: author and check utility-CSS generator configuration files

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use windcfg_core::{check_config, Config, Severity};

/// Configuration tool for the windcfg utility-CSS generator
#[derive(Parser)]
#[command(name = "windcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Config file to write
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },

    /// Check a configuration file against its invariants
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file to check
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },

    /// Print the design tokens a configuration contributes
    Tokens {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file to read
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },

    /// Rewrite a configuration file in canonical form
    Fmt {
        /// Config file to rewrite
        #[arg(default_value = DEFAULT_CONFIG)]
        path: PathBuf,
    },
}

const DEFAULT_CONFIG: &str = "windcfg.json";

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force, path } => cmd_init(force, &path),
        Commands::Check { json, path } => cmd_check(json, &path),
        Commands::Tokens { json, path } => cmd_tokens(json, &path),
        Commands::Fmt { path } => cmd_fmt(&path),
    }
}

fn cmd_init(force: bool, path: &Path) {
    if path.exists() && !force {
        eprintln!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
        std::process::exit(1);
    }

    match Config::default().save(path) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(json: bool, path: &Path) {
    let config = load_or_exit(path);
    let report = check_config(&config);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("failed to serialize")
        );
    } else {
        println!("Configuration Check: {}\n", path.display());

        for finding in &report.findings {
            let severity = match finding.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!("  {severity}  {} - {}", finding.field, finding.message);
        }
        if report.findings.is_empty() {
            println!("  no findings");
        }

        println!(
            "\n{} finding(s): {} error(s), {} warning(s)",
            report.findings.len(),
            report.error_count(),
            report.warning_count()
        );
    }

    if !report.ok() {
        std::process::exit(1);
    }
}

fn cmd_tokens(json: bool, path: &Path) {
    let config = load_or_exit(path);
    let tokens = config.colors().flatten();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tokens).expect("failed to serialize")
        );
        return;
    }

    println!("Design Tokens: {}\n", path.display());

    for token in &tokens {
        println!("  {} = {}", token.name, token.value);
    }

    println!("\n{} token(s)", tokens.len());
}

fn cmd_fmt(path: &Path) {
    let config = load_or_exit(path);

    match config.save(path) {
        Ok(()) => println!("Rewrote {}", path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

fn load_or_exit(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
