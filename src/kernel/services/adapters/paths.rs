//! Where swipedeck keeps its files, one directory per user:
//! - macOS: ~/Library/Application Support/swipedeck
//! - Linux: $XDG_DATA_HOME/swipedeck, else ~/.local/share/swipedeck
//! - Windows: %APPDATA%\swipedeck

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "swipedeck";

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn data_root() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        env_dir("HOME").map(|home| home.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        env_dir("APPDATA")
    } else if cfg!(target_os = "linux") {
        env_dir("XDG_DATA_HOME")
            .or_else(|| env_dir("HOME").map(|home| home.join(".local").join("share")))
    } else {
        None
    }
}

fn data_file(name: &str) -> Option<PathBuf> {
    data_root().map(|root| root.join(APP_NAME).join(name))
}

pub fn get_store_path() -> Option<PathBuf> {
    data_file("session.json")
}

pub fn get_settings_path() -> Option<PathBuf> {
    data_file("settings.json")
}

pub fn get_catalog_path() -> Option<PathBuf> {
    data_file("items.json")
}

/// Creates the log directory if needed and returns it.
pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = data_file("logs")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no per-user data directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
