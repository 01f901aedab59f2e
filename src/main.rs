use std::io;
use std::path::PathBuf;

use swipedeck::app::Session;
use swipedeck::kernel::services::adapters::{
    builtin_catalog, ensure_log_dir, get_catalog_path, get_settings_path, get_store_path,
    load_catalog, load_config_or_default, FileStore, LogSink,
};
use swipedeck::kernel::services::ports::{DeckConfig, Item};
use swipedeck::{logging, tui};

fn main() -> io::Result<()> {
    let _logging = match ensure_log_dir() {
        Ok(dir) => logging::init(&dir).ok(),
        Err(_) => None,
    };
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    let config = get_settings_path()
        .map(|path| load_config_or_default(&path))
        .unwrap_or_else(DeckConfig::default);
    let items = load_items(std::env::args().nth(1).map(PathBuf::from));

    let store_path = get_store_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Cannot determine data directory")
    })?;
    let store = FileStore::open(store_path);

    let mut session = Session::mount(items, config, store, LogSink);
    tui::run(&mut session)
}

/// Catalog from the command line, then the data directory, then the built-in deck.
fn load_items(arg: Option<PathBuf>) -> Vec<Item> {
    let Some(path) = arg.or_else(|| get_catalog_path().filter(|path| path.exists())) else {
        return builtin_catalog();
    };
    match load_catalog(&path) {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "using built-in catalog");
            builtin_catalog()
        }
    }
}
