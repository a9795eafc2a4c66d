use clap::Parser;
use f1_predict::utils::{logger, validation::Validate};
use f1_predict::{CliConfig, ErgastClient, SeasonEvaluator};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting f1-predict");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = ErgastClient::new(config.base_url.clone());
    let evaluator = SeasonEvaluator::new(client, config);

    let summary = evaluator.run().await;

    tracing::info!(
        "Prediction matched {} of {} seasons ({:.2}%)",
        summary.matches,
        summary.total_years,
        summary.frequency()
    );
    println!(
        "The prediction came true {} times out of {} years",
        summary.matches, summary.total_years
    );
    println!("The frequency is {}%", summary.frequency());
}
