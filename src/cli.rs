// CLI - argument parsing for everything that is not the kiosk itself
//
// Running `scandesk` with no subcommand starts the kiosk; the `config`
// subcommand inspects or rewrites the config file and exits.

use crate::config::{Config, VERSION};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

/// scandesk - terminal check-in kiosk
#[derive(Parser)]
#[command(name = "scandesk")]
#[command(version = VERSION)]
#[command(about = "Terminal check-in kiosk for events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    else {
        return false; // no subcommand, run the kiosk
    };

    let result = if path {
        config_path().map(|p| println!("{}", p.display()))
    } else if show {
        show_config();
        Ok(())
    } else if reset {
        reset_config()
    } else if edit {
        edit_config()
    } else {
        println!("Usage: scandesk config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    true
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn show_config() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", strip_comments(&config.to_toml()));
    println!();
    match Config::config_path() {
        Some(path) if path.exists() => println!("# Source: {}", path.display()),
        _ => println!("# Source: defaults (no config file)"),
    }
}

/// Drop comment and blank lines so --show prints only the values.
fn strip_comments(toml: &str) -> String {
    let mut out = String::new();
    for line in toml.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn reset_config() -> Result<()> {
    let path = config_path()?;

    if path.exists() && !ask_overwrite(&path)? {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Could not create config directory")?;
    }
    std::fs::write(&path, Config::default().to_toml()).context("Could not write config file")?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn ask_overwrite(path: &Path) -> Result<bool> {
    eprint!("Config file exists at {}. Overwrite? [y/N] ", path.display());
    std::io::stderr().flush().ok();

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Could not read confirmation")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn edit_config() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}' (set $EDITOR)"))?;
    if !status.success() {
        bail!("Editor exited with status {status}");
    }
    Ok(())
}
