use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load in order and returns the header path.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting parameter generation...");

        tracing::debug!("Extracting kernel records...");
        let records = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} records", records.len());

        tracing::debug!("Building lookup table...");
        let result = self.pipeline.transform(records).await?;
        tracing::debug!(
            "Built table with {} entries from {} records",
            result.table.len(),
            result.input_records
        );

        tracing::debug!("Writing header...");
        let output_path = self.pipeline.load(result).await?;

        Ok(output_path)
    }
}
