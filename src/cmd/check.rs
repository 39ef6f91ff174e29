//! `florist check` — resolve and validate configuration without starting.
//!
//! Runs the same settings resolution as `run` and reports the outcome
//! in human-readable text or machine-readable JSON. Passwords embedded
//! in the broker URL are masked in the report.

use crate::broker;
use crate::cli::{CheckArgs, CheckFormat};
use crate::config::{validation, BrokerConfig, Settings};
use crate::error::FloristError;

pub fn execute(args: &CheckArgs) -> Result<(), FloristError> {
    let settings = Settings::from_args(&args.settings);

    match (validation::validate_auth(&settings), settings.broker()) {
        (Ok(pattern), Ok(broker_cfg)) => {
            report_ok(args, &settings, pattern.as_deref(), &broker_cfg);
            Ok(())
        }
        (auth, broker_cfg) => {
            let errors: Vec<String> = [
                auth.err().map(|e| e.to_string()),
                broker_cfg.err().map(|e| e.to_string()),
            ]
            .into_iter()
            .flatten()
            .collect();

            report_errors(args, &errors);
            Err(FloristError::CheckFailed { errors })
        }
    }
}

fn report_ok(
    args: &CheckArgs,
    settings: &Settings,
    pattern: Option<&str>,
    broker_cfg: &BrokerConfig,
) {
    let display_url = broker::redacted(&broker_cfg.url());

    match args.format {
        CheckFormat::Text => {
            println!("\u{2713} configuration ok");
            match pattern {
                Some(pattern) => println!(
                    "  auth:    {} (whitelist: {} emails, pattern {pattern})",
                    settings.auth_mode(),
                    settings.email_whitelist.len(),
                ),
                None => println!("  auth:    {}", settings.auth_mode()),
            }
            println!(
                "  broker:  {display_url} (from {}, db {})",
                broker_cfg.source.name(),
                broker_cfg.db,
            );
        }
        CheckFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "auth_mode": settings.auth_mode(),
                    "whitelist_pattern": pattern,
                    "whitelist_size": settings.email_whitelist.len(),
                    "broker_url": display_url,
                    "broker_source": broker_cfg.source.name(),
                    "broker_db": broker_cfg.db,
                })
            );
        }
    }
}

fn report_errors(args: &CheckArgs, errors: &[String]) {
    match args.format {
        CheckFormat::Text => {
            eprintln!(
                "\u{2717} configuration has {} error{}\n",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            );
            for error in errors {
                eprintln!("{error}");
            }
        }
        CheckFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": false,
                    "errors": errors,
                })
            );
        }
    }
}
