pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, GeneratorConfig};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::GeneratorEngine, pipeline::ParametersPipeline, render::render_header};
pub use domain::model::{Algorithm, KernelParameters, KernelRecord, Triplet};
pub use domain::table::ParameterTable;
pub use utils::error::{GeneratorError, Result};
