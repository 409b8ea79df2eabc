#![forbid(unsafe_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use picotorrent_config::config::{paths, SettingKey, Settings};

#[derive(Parser)]
#[command(name = "picotorrent-config")]
#[command(about = "Inspect and edit PicoTorrent settings")]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the one in the data directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the settings file path
    Path,

    /// Show every named setting with its effective value
    List {
        /// Emit JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective value of one setting
    Get {
        #[arg(value_parser = parse_key)]
        name: SettingKey,
    },

    /// Store a value and save the file
    Set {
        #[arg(value_parser = parse_key)]
        name: SettingKey,
        value: String,
    },

    /// Remove a stored value so the default applies, and save
    Reset {
        #[arg(value_parser = parse_key)]
        name: SettingKey,
    },
}

fn parse_key(s: &str) -> Result<SettingKey, String> {
    s.parse()
}

fn init_tracing() -> Result<()> {
    // Quiet by default so stdout carries only command output
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

fn open_settings(config: Option<&Path>) -> Result<Settings> {
    let settings = match config {
        Some(path) => Settings::open_at(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::open().context("Failed to load settings")?,
    };
    Ok(settings)
}

/// Resolve the settings file path without reading it
fn settings_file(config: Option<&Path>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path.to_path_buf()),
        None => paths::settings_path().context("Failed to resolve settings path"),
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        // Never loads the file, so it works when the file is unreadable
        Commands::Path => {
            writeln!(out, "{}", settings_file(config)?.display())?;
            Ok(())
        }
        command => {
            let mut settings = open_settings(config)?;
            run_with_settings(command, &mut settings, out)
        }
    }
}

fn run_with_settings(command: Commands, settings: &mut Settings, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Path => writeln!(out, "{}", settings.path().display())?,
        Commands::List { json } => {
            let shown = SettingKey::ALL
                .iter()
                .map(|key| settings.effective(*key))
                .collect::<Result<Vec<_>, _>>()
                .context("Settings file holds an unreadable value")?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&shown)?)?;
            } else {
                let width = shown.iter().map(|s| s.name.len()).max().unwrap_or(0);
                for entry in shown {
                    let marker = if entry.stored { "" } else { "  (default)" };
                    writeln!(out, "{:width$}  {}{}", entry.name, entry.value, marker)?;
                }
            }
        }
        Commands::Get { name } => {
            let shown = settings
                .effective(name)
                .with_context(|| format!("Failed to read '{name}'"))?;
            writeln!(out, "{}", shown.value)?;
        }
        Commands::Set { name, value } => {
            settings.set_from_str(name, &value)?;
            settings
                .save()
                .with_context(|| format!("Failed to save settings after setting '{name}'"))?;
            info!(key = %name, value = %value, "Updated setting");
        }
        Commands::Reset { name } => {
            if settings.remove(name.name()) {
                settings
                    .save()
                    .with_context(|| format!("Failed to save settings after resetting '{name}'"))?;
                info!(key = %name, "Reset setting to default");
            } else {
                info!(key = %name, "Setting already at default");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("picotorrent-config").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_path_with_config_skips_loading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ \"listen_port\": ").unwrap();
        let arg = path.to_str().unwrap();

        let out = run_args(&["--config", arg, "path"]).unwrap();
        assert_eq!(out, format!("{}\n", path.display()));

        // Commands that need the document still report the parse failure
        assert!(run_args(&["--config", arg, "list"]).is_err());
    }

    #[test]
    fn test_path_without_config_uses_data_dir() {
        match paths::settings_path() {
            Ok(expected) => {
                let out = run_args(&["path"]).unwrap();
                assert_eq!(out, format!("{}\n", expected.display()));
            }
            Err(_) => assert!(run_args(&["path"]).is_err()),
        }
    }

    #[test]
    fn test_list_json_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PicoTorrent.json");
        fs::write(&path, r#"{"listen_port": 7000}"#).unwrap();

        let out = run_args(&["--config", path.to_str().unwrap(), "list", "--json"]).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = rows.as_array().unwrap();

        assert_eq!(rows.len(), SettingKey::ALL.len());
        let port = rows.iter().find(|r| r["name"] == "listen_port").unwrap();
        assert_eq!(port["value"], "7000");
        assert_eq!(port["stored"], true);
        let close = rows.iter().find(|r| r["name"] == "close_action").unwrap();
        assert_eq!(close["value"], "prompt");
        assert_eq!(close["stored"], false);
    }

    #[test]
    fn test_list_text_marks_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PicoTorrent.json");
        fs::write(&path, r#"{"listen_port": 7000}"#).unwrap();

        let out = run_args(&["--config", path.to_str().unwrap(), "list"]).unwrap();
        let port = out.lines().find(|l| l.starts_with("listen_port ")).unwrap();
        assert!(port.ends_with("7000"));
        let proxy = out.lines().find(|l| l.starts_with("proxy_type ")).unwrap();
        assert!(proxy.ends_with("none  (default)"));
    }

    #[test]
    fn test_set_parses_and_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("PicoTorrent.json");
        let arg = path.to_str().unwrap();

        assert_eq!(run_args(&["--config", arg, "set", "listen_port", "12345"]).unwrap(), "");
        run_args(&["--config", arg, "set", "proxy_type", "socks5"]).unwrap();

        let saved = Settings::open_at(&path).unwrap();
        assert_eq!(saved.listen_port().unwrap(), 12345);
        assert_eq!(saved.proxy_type().unwrap(), picotorrent_config::ProxyType::Socks5);
        assert_eq!(run_args(&["--config", arg, "get", "listen_port"]).unwrap(), "12345\n");
    }

    #[test]
    fn test_set_rejects_bad_value_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PicoTorrent.json");

        let err = run_args(&["--config", path.to_str().unwrap(), "set", "listen_port", "70000"])
            .unwrap_err();
        assert!(err.to_string().contains("listen_port"));
        assert!(!path.exists());
    }

    #[test]
    fn test_reset_removes_key_and_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PicoTorrent.json");
        fs::write(&path, r#"{"listen_port": 7000, "legacy": 1}"#).unwrap();

        run_args(&["--config", path.to_str().unwrap(), "reset", "listen_port"]).unwrap();

        let saved = Settings::open_at(&path).unwrap();
        assert!(!saved.contains("listen_port"));
        assert!(saved.contains("legacy"));
        assert_eq!(saved.listen_port().unwrap(), 6881);
    }

    #[test]
    fn test_reset_of_default_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PicoTorrent.json");

        run_args(&["--config", path.to_str().unwrap(), "reset", "listen_port"]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_setting_name_is_rejected() {
        assert!(parse_key("listen_prot").is_err());
        assert_eq!(parse_key("listen_port").unwrap(), SettingKey::ListenPort);
        assert!(Cli::try_parse_from(["picotorrent-config", "get", "listen_prot"]).is_err());
    }
}
