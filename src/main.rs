use std::path::PathBuf;

use anyhow::Result;
use shared_components::config::Config;
use shared_components::{gallery, logger};

#[tokio::main]
async fn main() -> Result<()> {
    // `--generate-config [path]` writes the defaults and exits
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path: PathBuf = match args.next() {
                    Some(path) => path.into(),
                    None => Config::get_default_config_path()?,
                };
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Usage: component-gallery [--generate-config [PATH]]");
                return Ok(());
            }
            other => {
                eprintln!("❌ Error: unknown argument '{other}'");
                eprintln!("\n💡 Run with --help to see the available options");
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    let logs = logger::LogBuffer::new();
    logger::init(&config.logging, logs.clone())?;

    gallery::run_app(config, logs).await?;

    Ok(())
}
