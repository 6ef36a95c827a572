//! Void Backpack
//!
//! Interactive survival inventory: pack up to ten items, sort them by name,
//! category or priority, and look them up with a linear or binary search.
//!
//! Run with: cargo run -p void_backpack
//!       or: cargo run --bin backpack

mod config;
mod menu;
mod render;

use config::BackpackConfig;
use menu::Menu;
use void_inventory::Backpack;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BackpackConfig::load();
    config.log_summary();

    let backpack = match Backpack::with_items(config.capacity, config.items.iter().cloned()) {
        Ok(backpack) => backpack,
        Err(e) => {
            log::warn!("Starter items rejected ({}), starting empty", e);
            Backpack::new(config.capacity)
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), backpack);

    if config.banner {
        if let Err(e) = menu.print_banner() {
            log::error!("Failed to write banner: {}", e);
        }
    }

    if let Err(e) = menu.run() {
        log::error!("Menu aborted: {}", e);
        std::process::exit(1);
    }

    log::info!("Session ended with {} items", menu.backpack().len());
}
