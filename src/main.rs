use clap::Parser;
use standings_tracker::utils::{logger, validation::Validate};
use standings_tracker::{
    CliConfig, LocalStorage, StandingsEngine, TablePipeline, TournamentStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting standings-tracker CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = TournamentStore::new(LocalStorage::new(config.store_path.clone()));

    if config.clear_store {
        tracing::info!("Clearing the tournament store");
        store.clear().await?;
        if config.input_files.is_empty() {
            println!("✅ Tournament store cleared");
            return Ok(());
        }
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TablePipeline::new(storage, store, config);

    let engine = StandingsEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Standings computation completed successfully");
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
