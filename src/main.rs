use clap::Parser;
use cusmm_params::core::ConfigProvider;
use cusmm_params::utils::{logger, validation::Validate};
use cusmm_params::{CliConfig, GeneratorEngine, GeneratorError, LocalStorage, ParametersPipeline};

fn report(e: &GeneratorError) -> ! {
    tracing::error!("❌ Parameter generation failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => report(&e),
    };

    if let Err(e) = config.validate() {
        report(&e);
    }

    // Relative paths in the config are relative to the working directory.
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ParametersPipeline::new(storage, config);
    let engine = GeneratorEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) if engine.pipeline().config().dry_run() => {
            tracing::info!("✅ Dry run finished, {} left untouched", output_path);
        }
        Ok(output_path) => {
            tracing::info!("✅ Header generated: {}", output_path);
        }
        Err(e) => report(&e),
    }

    Ok(())
}
