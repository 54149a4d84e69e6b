use crate::core::render::render_header;
use crate::core::{ConfigProvider, KernelRecord, Pipeline, Storage, TransformResult};
use crate::domain::table::ParameterTable;
use crate::utils::error::Result;

/// Reads `parameters_<GPU>.json`, builds the lookup table and writes the header.
pub struct ParametersPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ParametersPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ParametersPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<KernelRecord>> {
        tracing::info!("GPU version: {}", self.config.gpu_version());

        let param_file = self.config.parameters_file();
        let param_path = param_file.to_string_lossy().into_owned();
        tracing::debug!("Reading kernel parameters from: {}", param_path);

        let raw = self.storage.read_file(&param_path).await?;
        // A non-array document surfaces as a serde "expected a sequence" error.
        let records: Vec<KernelRecord> = serde_json::from_slice(&raw)?;
        tracing::info!(
            "About to process {} kernels from file {}",
            records.len(),
            param_path
        );

        Ok(records)
    }

    async fn transform(&self, records: Vec<KernelRecord>) -> Result<TransformResult> {
        let table = ParameterTable::from_records(&records)?;
        let overridden = table.overridden();
        if overridden > 0 {
            tracing::warn!(
                "{} kernel(s) were redefined later in the input; the last definition was kept",
                overridden
            );
        }

        tracing::debug!("Get parameters and write to file");
        let header = render_header(&table);

        Ok(TransformResult {
            table,
            header,
            input_records: records.len(),
            overridden,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::info!(
            "Found {} kernels in {}",
            result.table.len(),
            self.config.parameters_file().display()
        );

        if self.config.dry_run() {
            tracing::info!(
                "Dry run: {} bytes would be written to {}",
                result.header.len(),
                output_path
            );
            return Ok(output_path);
        }

        tracing::info!("Printing them to file {}", output_path);
        self.storage
            .write_file(&output_path, result.header.as_bytes())
            .await?;

        tracing::debug!("Header written ({} bytes)", result.header.len());
        Ok(output_path)
    }
}
