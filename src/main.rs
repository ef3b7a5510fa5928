use clap::Parser;
use todo_etl::core::ConfigProvider;
use todo_etl::utils::{logger, validation::Validate};
use todo_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, TodoPipeline, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    println!("{}", "=".repeat(70));
    println!("  Todo ETL – Fetch & Save Todo Data");
    println!("{}", "=".repeat(70));

    let outcome = match cli.config.clone() {
        Some(path) => run_from_file(&path).await,
        None => run(cli).await,
    };

    match outcome {
        Ok(output_path) => {
            println!("\n🎉  Done! Open '{}' to see your data.", output_path);
            println!("{}\n", "=".repeat(70));
        }
        Err(e) => {
            tracing::debug!("ETL process failed: {:?} (Category: {:?})", e, e.category());
            eprintln!("❌  {}", e.user_friendly_message());
            eprintln!("💡  Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run_from_file(path: &str) -> Result<String, EtlError> {
    tracing::info!("📁 Loading configuration from: {}", path);
    let config = TomlConfig::from_file(path)?;
    run(config).await
}

async fn run<C>(config: C) -> Result<String, EtlError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let storage = LocalStorage::new(".");
    let pipeline = TodoPipeline::new(storage, config);
    let report = EtlEngine::new(pipeline).run().await?;
    Ok(report.output_path)
}
