use std::io;

use quiz_academy::app::App;
use quiz_academy::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "Starting Privacy Academy (progress file: {})",
        config.progress_path
    );

    let app = App::new(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    app.run(&mut input, &mut output)?;
    Ok(())
}
