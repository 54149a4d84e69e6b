pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_gpu_version, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_GPU_VERSION: &str = "P100";
pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_OUTPUT_PATH: &str = "parameters.h";

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub gpu_version: String,
    pub base_dir: String,
    pub output_path: String,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            gpu_version: DEFAULT_GPU_VERSION.to_string(),
            base_dir: DEFAULT_BASE_DIR.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Layers the file's values over the defaults.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            gpu_version: file.input.gpu_version.clone().unwrap_or(defaults.gpu_version),
            base_dir: file.input.base_dir.clone().unwrap_or(defaults.base_dir),
            output_path: file.output.path.clone().unwrap_or(defaults.output_path),
            dry_run: false,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn gpu_version(&self) -> &str {
        &self.gpu_version
    }

    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_gpu_version("gpu_version", &self.gpu_version)?;
        validate_path("base_dir", &self.base_dir)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::{GeneratorConfig, TomlConfig};
    use crate::utils::error::Result;
    use clap::Parser;

    /// Command-line options. Unset options fall back to the config file, then to defaults.
    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "generate_parameters")]
    #[command(about = "Generator of LibCuSMM parameters.h. The Library for Cuda Small Matrix Multiplications.")]
    pub struct CliConfig {
        /// GPU card version, used to select the appropriate parameters file [default: P100]
        #[arg(short = 'g', long, value_name = "GPU_VERSION")]
        pub gpu_version: Option<String>,

        /// Base directory to look for the parameter files [default: .]
        #[arg(short = 'd', long, value_name = "BASE_DIR")]
        pub base_dir: Option<String>,

        /// Header file to write [default: parameters.h]
        #[arg(short = 'o', long, value_name = "FILE")]
        pub output: Option<String>,

        /// TOML configuration file
        #[arg(short = 'c', long, value_name = "FILE")]
        pub config: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,

        /// Build the table but do not write the header
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        pub fn resolve(&self) -> Result<GeneratorConfig> {
            let file = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    TomlConfig::from_file(path)?
                }
                None => TomlConfig::default(),
            };
            Ok(self.apply_overrides(GeneratorConfig::from_toml(&file)))
        }

        pub fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
            if let Some(gpu_version) = &self.gpu_version {
                config.gpu_version = gpu_version.clone();
            }
            if let Some(base_dir) = &self.base_dir {
                config.base_dir = base_dir.clone();
            }
            if let Some(output) = &self.output {
                config.output_path = output.clone();
            }
            config.dry_run |= self.dry_run;
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_generator() {
        let config = GeneratorConfig::default();
        assert_eq!(config.gpu_version(), "P100");
        assert_eq!(config.base_dir(), ".");
        assert_eq!(config.output_path(), "parameters.h");
        assert_eq!(
            config.parameters_file(),
            std::path::Path::new(".").join("parameters_P100.json")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_keeps_defaults_for_missing_keys() {
        let file = TomlConfig::from_toml_str("[input]\nbase_dir = \"/data\"\n").unwrap();
        let config = GeneratorConfig::from_toml(&file);

        assert_eq!(config.base_dir, "/data");
        assert_eq!(config.gpu_version, DEFAULT_GPU_VERSION);
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
    }

    #[test]
    fn test_validation_rejects_bad_gpu_version() {
        let config = GeneratorConfig {
            gpu_version: "../../etc".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file_values() {
        use clap::Parser;

        let file = TomlConfig::from_toml_str(
            "[input]\ngpu_version = \"K20X\"\nbase_dir = \"/data\"\n[output]\npath = \"a.h\"\n",
        )
        .unwrap();
        let args = CliConfig::parse_from(["generate_parameters", "-g", "V100", "--dry-run"]);

        let config = args.apply_overrides(GeneratorConfig::from_toml(&file));

        assert_eq!(config.gpu_version, "V100");
        assert_eq!(config.base_dir, "/data");
        assert_eq!(config.output_path, "a.h");
        assert!(config.dry_run);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_without_config_uses_defaults() {
        use clap::Parser;

        let args = CliConfig::parse_from(["generate_parameters"]);
        assert_eq!(args.resolve().unwrap(), GeneratorConfig::default());
    }
}
