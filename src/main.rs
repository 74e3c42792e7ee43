use clap::Parser;
use shopfront::core::config;
use shopfront::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(
    name = "shopfront",
    about = "Terminal storefront with a slide-out navigation drawer"
)]
struct Args {
    /// Run without a session backend (empty cart, signed out)
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shopfront.log in current directory.
    // This is the diagnostic sink: sign-out failures land here, never on
    // screen.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("shopfront.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Shopfront starting up (offline: {})", args.offline);

    let config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&config, args.offline);

    tui::run(resolved)
}
