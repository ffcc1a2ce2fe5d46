//! Preview binary - prints every error message in every configured language
//!
//! Usage:
//!   cargo run --bin preview                                   # Sample of every error kind
//!   cargo run --bin preview -- '{"kind":"invalidWeekday","weekday":"Caturday"}'
//!
//! Optional environment variables:
//! - PREVIEW_LANGUAGES (comma-separated codes, defaults to every enabled language)
//! - PREVIEW_DATE (YYYY-MM-DD, defaults to 2020-01-01)

use anyhow::{Context, Result};
use error_i18n::config::PreviewConfig;
use error_i18n::i18n::TranslationValidator;
use error_i18n::{render, ErrorVariant};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("error_i18n=info".parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    info!("Loading configuration...");
    let config = PreviewConfig::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let errors = if args.is_empty() {
        sample_errors(&config)
    } else {
        args.iter()
            .map(|raw| {
                ErrorVariant::from_json(raw)
                    .with_context(|| format!("Could not decode error payload: {}", raw))
            })
            .collect::<Result<Vec<_>>>()?
    };

    info!(
        "Rendering {} errors in {} languages",
        errors.len(),
        config.languages.len()
    );

    for language in &config.languages {
        println!();
        println!(
            "========== {} / {} ({}) ==========",
            language.native_name(),
            language.name(),
            language.code()
        );
        for error in &errors {
            println!("[{}] {}", error.kind().tag(), render(*language, error));
        }

        let report = TranslationValidator::validate(*language);
        for warning in &report.warnings {
            warn!("{}: {}", language.code(), warning);
        }
        if report.has_errors() {
            anyhow::bail!(
                "Translation table for '{}' is broken: {:?}",
                language.code(),
                report.errors
            );
        }
    }
    println!();

    Ok(())
}

/// One instance of every error kind.
fn sample_errors(config: &PreviewConfig) -> Vec<ErrorVariant> {
    vec![
        ErrorVariant::GeneralError,
        ErrorVariant::InvalidWeekday {
            weekday: "Caturday".to_string(),
        },
        ErrorVariant::InvalidEmailDomain {
            email: "test@invalid.now".to_string(),
            valid_domains: vec![
                "valid.com".to_string(),
                "valid.no".to_string(),
                "also.valid.com".to_string(),
            ],
        },
        ErrorVariant::TooLateToAppologize { date: config.date },
    ]
}
