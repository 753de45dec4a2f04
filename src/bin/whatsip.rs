use clap::Parser;
use tracing::Level;
use whatsip::WhatsipConfig;

mod commands;

use commands::lookup::LookupArgs;

/// A stylish IP address lookup tool.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// configuration file path, by default <config dir>/whatsip/whatsip.toml is used
    #[clap(long)]
    config: Option<String>,

    /// Print the effective configuration and exit
    #[clap(long)]
    show_config: bool,

    /// Print debug information
    #[clap(long)]
    debug: bool,

    #[clap(flatten)]
    lookup: LookupArgs,
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match WhatsipConfig::new(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}. Using default settings.", e);
            WhatsipConfig::default()
        }
    };

    if cli.show_config {
        commands::config::run(&config, cli.config.as_deref());
        return;
    }

    commands::lookup::run(&config, cli.lookup);
}
