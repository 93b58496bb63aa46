use clap::Parser;
use warpcmd::utils::logger;
use warpcmd::{resolve, ConfigStore, Platform, DEFAULT_CONFIG_PATH};

#[derive(Debug, Parser)]
#[command(name = "warpcmd")]
#[command(about = "Validate a warp command config and preview endpoint resolution")]
struct Cli {
    /// Path to the command config (JSON, or TOML by extension)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: std::path::PathBuf,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Checking warp command config: {}", cli.config.display());

    let store = ConfigStore::new(&cli.config);
    match store.load() {
        Ok(None) => {
            println!(
                "No command config at {}; nothing would be registered.",
                store.path().display()
            );
        }
        Ok(Some(config)) => {
            println!("{} command(s) configured:", config.commands.len());
            for entry in &config.commands {
                let java = resolve(entry.ip.as_deref(), entry.port, Platform::Java);
                let bedrock = resolve(entry.ip.as_deref(), entry.port, Platform::Bedrock);
                println!(
                    "  /{:<16} java -> {}:{}  bedrock -> {}:{}",
                    entry.name, java.host, java.port, bedrock.host, bedrock.port
                );
            }
            println!("✅ Config is valid.");
        }
        Err(e) => {
            tracing::error!("Config validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
