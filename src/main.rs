mod config;
mod currency;
mod error;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let settings = config::Settings::from_env();
    logging::init(&settings);

    match args.len() {
        1 => run::as_shell(&settings),
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: budget-tracker [command]");
            Ok(())
        }
    }
}
