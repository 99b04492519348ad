// ABOUTME: Entry point for content-studio: a terminal UI for styled placeholder content.
// ABOUTME: Parses CLI args, loads config, sets up logging, and launches the app.

use clap::Parser;

use content_studio::app::{App, print_styles};
use content_studio::cli::Args;
use content_studio::config::Config;
use content_studio::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    logging::init(&config.log_path(), &config.logging.level)?;

    let app = App::new(config, args.prompt.clone())?;

    if args.list_styles {
        print_styles(app.studio().presets());
        return Ok(());
    }

    if args.print {
        return app.run_headless(args.json, args.export);
    }

    app.run().await
}
