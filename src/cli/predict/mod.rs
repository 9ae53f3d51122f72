//! Predict command - runs one prediction locally and prints the JSON body

use clap::Args;

use crate::api::types::{PredictForm, PredictResponse};
use crate::config::AppConfig;
use crate::infrastructure::model::create_recognizer;
use crate::infrastructure::observability::init_tracing;
use crate::infrastructure::services::PredictionService;

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Input text
    #[arg(long)]
    pub text: String,

    /// Comma-separated candidate labels
    #[arg(long)]
    pub labels: Option<String>,
}

/// Load the model, predict once, print `{"data": ...}`
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging, &config.observability.tracing);

    let input = PredictForm {
        text: Some(args.text),
        labels: args.labels,
    }
    .into_input()?;

    let recognizer = create_recognizer(&config.model)?;
    let service = PredictionService::new(recognizer, config.model.id.clone());
    let data = service.predict(input.text, input.labels).await?;

    println!("{}", serde_json::to_string_pretty(&PredictResponse { data })?);

    Ok(())
}
