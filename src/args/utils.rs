//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `LANGBRIDGE_TRACE=1` enables TRACE level for request/fallback tracing.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if std::env::var("LANGBRIDGE_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse language tags, handling both comma-separated and repeated formats.
///
/// Inputs:
/// - `values`: Raw values from the command line (may contain comma-separated tags).
///
/// Output:
/// - Vector of individual language tags, in order, without duplicates.
///
/// Details:
/// - Splits each input string by commas and trims whitespace.
/// - Filters out empty strings.
pub fn parse_language_list(values: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for value in values {
        for tag in value.split(',') {
            let trimmed = tag.trim();
            if !trimmed.is_empty() && !result.iter().any(|t| t == trimmed) {
                result.push(trimmed.to_string());
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_list_splits_and_dedups() {
        let values = vec![" es, fr ".to_string(), "pt-BR".to_string(), "es,,".to_string()];
        assert_eq!(parse_language_list(&values), vec!["es", "fr", "pt-BR"]);
    }
}
