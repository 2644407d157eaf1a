use std::io;

use shelfwise_cli::Menu;
use shelfwise_infra::StorageConfig;

fn main() -> anyhow::Result<()> {
    // Interactive use: keep the terminal quiet unless RUST_LOG asks otherwise.
    shelfwise_observability::init_with_default("warn");

    let config = StorageConfig::from_env();
    tracing::debug!(data_file = %config.data_file.display(), "starting shelfwise");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(config, stdin.lock(), stdout.lock()).run()
}
