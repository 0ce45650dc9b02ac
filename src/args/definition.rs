//! Command-line argument definition.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Langbridge - translate localization files with regional and source fallback
#[derive(Parser, Debug)]
#[command(name = "langbridge")]
#[command(version)]
#[command(
    about = "Translate localization files through a remote service with deterministic fallback",
    long_about = None
)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.config/langbridge/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Supported operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a JSON localization file
    Json(JsonArgs),
    /// Translate plain strings
    Text(TextArgs),
}

/// Arguments for `langbridge json`.
#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct JsonArgs {
    /// JSON file to translate
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Source language of the input
    #[arg(short, long, default_value = "en")]
    pub source: String,

    /// Target languages (comma-separated or repeated, e.g. es,fr,pt-BR)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub target: Vec<String>,

    /// Do not fill missing languages or keys from the source content
    #[arg(long)]
    pub no_fallback: bool,

    /// Do not let regional tags (pt-BR) borrow their base language (pt)
    #[arg(long)]
    pub no_regional_fallback: bool,

    /// Language to use as last-resort fallback (accepted; source content is substituted)
    #[arg(long)]
    pub fallback_language: Option<String>,

    /// Ask the service to generate plural forms
    #[arg(long)]
    pub pluralization: bool,

    /// Tag the content with a namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Group output by namespace
    #[arg(long)]
    pub group_by_namespace: bool,

    /// Export one document per namespace
    #[arg(long)]
    pub export_per_namespace: bool,

    /// Allow placeholders such as {name} to be translated
    #[arg(long)]
    pub no_preserve_placeholders: bool,
}

/// Arguments for `langbridge text`.
#[derive(ClapArgs, Debug)]
pub struct TextArgs {
    /// Source language of the text
    #[arg(short, long, default_value = "en")]
    pub source: String,

    /// Target languages (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub target: Vec<String>,

    /// Allow placeholders such as {name} to be translated
    #[arg(long)]
    pub no_preserve_placeholders: bool,

    /// Strings to translate
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The json subcommand parses languages and fallback switches.
    fn parses_json_command() {
        let args = Args::try_parse_from([
            "langbridge",
            "json",
            "--input",
            "en.json",
            "--target",
            "es,fr",
            "--target",
            "pt-BR",
            "--no-regional-fallback",
            "--verbose",
        ])
        .expect("args should parse");

        assert!(args.verbose);
        let Command::Json(json) = args.command else {
            panic!("expected json command");
        };
        assert_eq!(json.input, PathBuf::from("en.json"));
        assert_eq!(json.source, "en");
        assert_eq!(json.target, vec!["es", "fr", "pt-BR"]);
        assert!(json.no_regional_fallback);
        assert!(!json.no_fallback);
    }

    #[test]
    fn text_command_requires_targets() {
        assert!(Args::try_parse_from(["langbridge", "text", "Hello"]).is_err());
        let args = Args::try_parse_from(["langbridge", "text", "-t", "de", "Hello", "World"])
            .expect("args should parse");
        let Command::Text(text) = args.command else {
            panic!("expected text command");
        };
        assert_eq!(text.text, vec!["Hello", "World"]);
    }
}
