//! Binary entry point: load the config, start file logging, build an empty
//! store, and drive the Ratatui event loop until the user exits. The book list
//! lives only in memory and is dropped with the app.
use library_manager::config::{data_dir, Config};
use library_manager::logging::init_tracing;
use library_manager::{run_app, App, BookStore};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let config = Config::load(&dir)?;
    let _guard = init_tracing(&config.logging.level, &config.log_path(&dir))?;

    info!(
        max_len = config.fields.max_len,
        overflow = ?config.fields.overflow,
        "starting library manager"
    );

    let store = BookStore::with_max_len(config.fields.max_len);
    let mut app = App::new(store, config.fields.overflow);
    run_app(&mut app)
}
