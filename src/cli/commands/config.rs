//! `campus config` handler
//!
//! Keys may be given bare (`data_dir`) or section-qualified (`paths.data_dir`,
//! `logging.level`). Edits are written to the user config file; path edits also
//! create the storage directories so the next backup has somewhere to go.

use crate::args::ConfigSubcommand;
use campus_records::config::Config;
use campus_records::core::backup::ensure_storage_dirs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands against the user config file
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let config_path = Config::config_file_path();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config, &config_path, &mut stdout)
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key, &mut stdout),
        Some(ConfigSubcommand::Set { key, value }) => {
            set_key(config, &config_path, &key, &value, &mut stdout)
        }
        Some(ConfigSubcommand::Unset { key }) => {
            unset_key(config, defaults, &config_path, &key, &mut stdout)
        }
        Some(ConfigSubcommand::Reset) => reset(&config_path, &mut stdin.lock(), &mut stdout).map(drop),
    };

    if let Err(e) = result {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Strip an optional `logging.` / `paths.` section prefix
fn bare_key(key: &str) -> &str {
    let key = key.trim();
    key.strip_prefix("logging.")
        .or_else(|| key.strip_prefix("paths."))
        .unwrap_or(key)
}

fn is_storage_key(key: &str) -> bool {
    matches!(key, "data_dir" | "data-dir" | "backup_dir" | "backup-dir")
}

fn show_all(config: &Config, config_path: &Path, out: &mut impl Write) -> Result<(), String> {
    writeln!(out, "\n=== Configuration ({}) ===\n", config_path.display())
        .and_then(|()| write!(out, "{config}"))
        .map_err(|e| e.to_string())
}

fn show_key(config: &Config, key: &str, out: &mut impl Write) -> Result<(), String> {
    let value = config
        .get(bare_key(key))
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    writeln!(out, "{value}").map_err(|e| e.to_string())
}

fn set_key(
    config: &mut Config,
    config_path: &Path,
    key: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let key = bare_key(key);
    config.set(key, value)?;
    config
        .save_to(config_path)
        .map_err(|e| format!("Failed to save config: {e}"))?;

    if is_storage_key(key) {
        ensure_storage_dirs(&config.paths).map_err(|e| e.to_string())?;
    }
    writeln!(out, "✓ Set {key} = {value}").map_err(|e| e.to_string())
}

fn unset_key(
    config: &mut Config,
    defaults: &Config,
    config_path: &Path,
    key: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let key = bare_key(key);
    config.unset(key, defaults)?;
    config
        .save_to(config_path)
        .map_err(|e| format!("Failed to save config: {e}"))?;

    let restored = config.get(key).unwrap_or_default();
    writeln!(out, "✓ Reset {key} to default ({restored})").map_err(|e| e.to_string())
}

/// Remove the config file after confirmation, then rebuild it from defaults
///
/// Returns whether the reset happened.
fn reset(
    config_path: &Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool, String> {
    let io_err = |e: io::Error| e.to_string();

    if !config_path.exists() {
        writeln!(out, "✓ Config is already at defaults").map_err(io_err)?;
        return Ok(false);
    }

    write!(out, "Reset {} to defaults? (y/n): ", config_path.display()).map_err(io_err)?;
    out.flush().map_err(io_err)?;
    let mut response = String::new();
    input.read_line(&mut response).map_err(io_err)?;

    let answer = response.trim();
    if !(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")) {
        writeln!(out, "✗ Reset cancelled").map_err(io_err)?;
        return Ok(false);
    }

    Config::reset_at(config_path).map_err(|e| format!("Failed to remove config file: {e}"))?;
    let fresh = Config::load_from(config_path);
    ensure_storage_dirs(&fresh.paths).map_err(|e| e.to_string())?;

    writeln!(out, "✓ Config reset to defaults").map_err(io_err)?;
    writeln!(out, "  data_dir   = {}", fresh.paths.data_dir).map_err(io_err)?;
    writeln!(out, "  backup_dir = {}", fresh.paths.backup_dir).map_err(io_err)?;
    Ok(true)
}
