use standings_tracker::config::toml_config::TomlConfig;
use standings_tracker::domain::ports::ConfigProvider;
use standings_tracker::utils::{logger, validation::Validate};
use standings_tracker::{LocalStorage, StandingsEngine, TablePipeline, TournamentStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger(false);

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "standings.toml".to_string());

    tracing::info!("Loading pipeline config from {}", config_path);
    let config = match TomlConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Running pipeline '{}'", config.pipeline.name);

    let store = TournamentStore::new(LocalStorage::new(config.store_path().to_string()));
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = TablePipeline::new(storage, store, config);

    match StandingsEngine::new(pipeline).run().await {
        Ok(output_path) => {
            println!("✅ Standings computed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Standings computation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
