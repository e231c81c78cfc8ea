//! Backup command handler

use crate::args::BackupSubcommand;
use campus_records::config::Config;
use campus_records::core::backup::{create_backup, directory_size, ensure_storage_dirs, format_kb};
use campus_records::verbose;
use std::path::Path;

/// Dispatch backup subcommands
pub fn run(subcommand: &BackupSubcommand, config: &Config) {
    match subcommand {
        BackupSubcommand::Create => handle_create(config),
        BackupSubcommand::Size => handle_size(config),
    }
}

fn handle_create(config: &Config) {
    if let Err(e) = ensure_storage_dirs(&config.paths) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    verbose!(
        "Backing up {} into {}",
        config.paths.data_dir,
        config.paths.backup_dir
    );
    match create_backup(
        Path::new(&config.paths.data_dir),
        Path::new(&config.paths.backup_dir),
    ) {
        Ok(dest) => println!("✓ Backup created: {}", dest.display()),
        Err(e) => {
            eprintln!("✗ Backup failed: {e}");
            std::process::exit(1);
        }
    }
}

fn handle_size(config: &Config) {
    let size = directory_size(Path::new(&config.paths.backup_dir));
    println!("Total size of all backups is: {}", format_kb(size));
}
