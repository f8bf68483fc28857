use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct StandingsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StandingsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting standings computation");

        tracing::info!("Extracting match data...");
        let matches = self.pipeline.extract().await?;
        tracing::info!("Extracted {} matches", matches.len());

        tracing::info!("Computing standings...");
        let result = self.pipeline.transform(matches).await?;
        for tables in &result.tournaments {
            tracing::info!(
                "{}: {} rounds, {} teams",
                tables.tournament.name,
                tables.rounds.len(),
                tables.series.len()
            );
        }

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
