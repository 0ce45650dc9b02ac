//! Handlers for the `json` and `text` subcommands.

use std::fs;
use std::path::Path;

use langbridge::client::{
    JsonTranslateOptions, TextTranslateOptions, TranslationClient, TranslationResult,
};
use langbridge::config::ClientConfig;
use langbridge::fallback::Document;

use crate::args::definition::{Args, Command, JsonArgs, TextArgs};
use crate::args::utils::parse_language_list;

/// Result type alias for command handlers.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the subcommand selected on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// # Errors
/// - Configuration, input, transport and output failures are returned to `main`
pub async fn run(args: &Args) -> Result<()> {
    let config = ClientConfig::load(args.config.as_deref())?;
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");
    let client = TranslationClient::new(config)?;

    match &args.command {
        Command::Json(json) => handle_json(&client, json).await,
        Command::Text(text) => handle_text(&client, text).await,
    }
}

/// What: Build JSON translation options from command-line flags.
pub fn json_options(args: &JsonArgs) -> JsonTranslateOptions {
    JsonTranslateOptions {
        preserve_placeholders: !args.no_preserve_placeholders,
        enable_pluralization: args.pluralization,
        namespace: args.namespace.clone(),
        group_by_namespace: args.group_by_namespace,
        export_per_namespace: args.export_per_namespace,
        fallback_to_source: !args.no_fallback,
        regional_fallback: !args.no_regional_fallback,
        fallback_language: args.fallback_language.clone(),
        ..JsonTranslateOptions::new(parse_language_list(&args.target))
            .with_source_language(args.source.clone())
    }
}

/// What: Read a JSON object from disk.
///
/// # Errors
/// - Returns `Err` when the file is unreadable, not JSON, or not an object
fn read_document(path: &Path) -> Result<Document> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    match serde_json::from_str::<serde_json::Value>(&contents)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?
    {
        serde_json::Value::Object(document) => Ok(document),
        _ => Err(format!("{} must contain a JSON object", path.display()).into()),
    }
}

/// What: Print or save a result as pretty JSON.
fn write_result(result: &TranslationResult, output: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(result)?;
    match output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "result written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// What: Translate a JSON file and emit the reconciled result.
async fn handle_json(client: &TranslationClient, args: &JsonArgs) -> Result<()> {
    let source = read_document(&args.input)?;
    let options = json_options(args);
    let result = client.translate_json(&source, &options).await?;
    if let Some(report) = &result.fallback {
        for language in &report.languages_fallback_to_source {
            eprintln!("warning: {language} fell back to source content");
        }
        for (language, base) in &report.regional_fallbacks {
            eprintln!("warning: {language} filled from {base}");
        }
        for (language, keys) in &report.keys_fallback {
            eprintln!("warning: {language} is missing {} key(s): {}", keys.len(), keys.join(", "));
        }
    }
    write_result(&result, args.output.as_deref())
}

/// What: Translate plain strings and print the pairs as JSON.
async fn handle_text(client: &TranslationClient, args: &TextArgs) -> Result<()> {
    let options = TextTranslateOptions {
        source_language: args.source.clone(),
        preserve_placeholders: !args.no_preserve_placeholders,
        ..TextTranslateOptions::new(parse_language_list(&args.target))
    };
    let result = client.translate_text(&args.text, &options).await?;
    write_result(&result, None)
}
