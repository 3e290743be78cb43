use clap::Parser;
use lagoon_eats::config::cli::parse_cell;
use lagoon_eats::config::OutputFormat;
use lagoon_eats::core::RecordSource;
use lagoon_eats::utils::error::ErrorSeverity;
use lagoon_eats::utils::{logger, validation::Validate};
use lagoon_eats::{
    menu_for_stall, suggest, BrowseEngine, BrowsePreset, CliConfig, CsvFileSource, Record, Result,
};
use serde_json::Value;
use std::io::Write;

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn write_output<W: Write>(out: W, records: &[Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut headers: Vec<&str> = Vec::new();
            for record in records {
                for key in record.data.keys() {
                    if !headers.contains(&key.as_str()) {
                        headers.push(key.as_str());
                    }
                }
            }

            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(&headers)?;
            for record in records {
                writer.write_record(
                    headers
                        .iter()
                        .map(|h| record.get(h).map(cell_text).unwrap_or_default()),
                )?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let mut out = out;
            for record in records {
                let line: Vec<String> = record.data.values().map(cell_text).collect();
                writeln!(out, "{}", line.join(" | "))?;
            }
        }
    }
    Ok(())
}

fn run(config: &CliConfig) -> Result<()> {
    let preset = match &config.preset {
        Some(path) => BrowsePreset::from_file(path)?,
        None => BrowsePreset::default(),
    };
    preset.validate()?;

    let stalls = CsvFileSource::new(&config.data).load()?;
    tracing::info!("📁 Loaded {} stalls from {}", stalls.len(), config.data);
    let stdout = std::io::stdout().lock();

    if let Some(query) = &config.suggest {
        let mut out = stdout;
        for name in suggest(&stalls, &preset.fields.name, query, config.suggest_limit) {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    if let (Some(stall), Some(menu_path)) = (&config.stall, &config.menu) {
        let stall_id = parse_cell(stall).unwrap_or(Value::Null);
        let items = CsvFileSource::new(menu_path).load()?;
        let menu = menu_for_stall(
            &items,
            &preset.fields.stall_id,
            &stall_id,
            &preset.fields.item_price,
        )?;
        tracing::info!("🍽️ Stall {} has {} menu items", stall, menu.len());
        return write_output(stdout, &menu, config.format);
    }

    let query = config.to_query(&preset.defaults);
    query.validate()?;

    let engine = BrowseEngine::new(preset.fields);
    let listing = engine.browse(&stalls, &query)?;
    write_output(stdout, &listing, config.format)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting lagoon-eats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Browse failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
