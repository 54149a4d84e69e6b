pub mod etl;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::KernelRecord;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TransformResult};
pub use crate::utils::error::Result;
