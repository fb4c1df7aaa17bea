use rolo_core::config::load_config;
use rolo_core::error::CoreError;
use rolo_core::types::OutputFormat;
use rolo_vcf::vcf::{extract_contacts_with, unfold};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting rolo contact extractor");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        return Err(
            CoreError::InvalidInput("no input files; usage: rolo <file.vcf>...".into()).into(),
        );
    }

    for path in &paths {
        let raw = tokio::fs::read_to_string(path).await?;
        let document = if config.extract.unfold {
            unfold(&raw)
        } else {
            raw
        };

        let contacts = extract_contacts_with(&document, config.extract.policy);

        let empty = contacts.iter().filter(|c| c.is_empty()).count();
        tracing::info!(path = %path, count = contacts.len(), "Extracted contacts");
        if empty > 0 {
            tracing::debug!(path = %path, empty, "Records with no recognizable fields");
        }

        match config.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&contacts)?),
            OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(&contacts)?),
            OutputFormat::Text => {
                for contact in &contacts {
                    println!("{}\t{}", contact.name, contact.phone);
                }
            }
        }
    }

    Ok(())
}
