//! CLI module for the NER service
//!
//! Provides subcommands:
//! - `serve`: HTTP server (default deployment mode)
//! - `predict`: one-off prediction printed to stdout

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Zero-shot named entity recognition service
#[derive(Parser)]
#[command(name = "ner-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Run a single prediction against the configured model
    Predict(predict::PredictArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["ner-service", "serve", "--port", "8080"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(8080)),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from([
            "ner-service",
            "predict",
            "--text",
            "Alice lives in Paris",
            "--labels",
            "person,location",
        ])
        .unwrap();

        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.text, "Alice lives in Paris");
                assert_eq!(args.labels.as_deref(), Some("person,location"));
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_predict_requires_text() {
        assert!(Cli::try_parse_from(["ner-service", "predict"]).is_err());
    }
}
