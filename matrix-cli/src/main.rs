use std::error::Error;
use std::io;

use matrix_cli::{config, App, Config};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = config::command().get_matches();
    let config = Config::from_matches(&matches);
    log::info!(
        "Starting matrix workbench (results file: {})",
        config.results_file.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), config);
    app.run()?;

    Ok(())
}
