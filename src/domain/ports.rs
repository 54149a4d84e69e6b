use crate::domain::model::KernelRecord;
use crate::domain::table::ParameterTable;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn gpu_version(&self) -> &str;
    fn base_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn dry_run(&self) -> bool;

    /// `<base_dir>/parameters_<gpu_version>.json`
    fn parameters_file(&self) -> PathBuf {
        PathBuf::from(self.base_dir()).join(format!("parameters_{}.json", self.gpu_version()))
    }
}

/// Outcome of the transform phase.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub table: ParameterTable,
    pub header: String,
    pub input_records: usize,
    /// Records that replaced an earlier record with the same triplet.
    pub overridden: usize,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<KernelRecord>>;
    async fn transform(&self, records: Vec<KernelRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
