use anyhow::Result;

const DEFAULT_FILTER: &str = "info";

/// Install the global logger.
///
/// An explicit `level` (a `RUST_LOG`-style filter such as `debug` or `strpack=trace`) wins
/// over the environment. Without one, `RUST_LOG` is used, falling back to `info`.
pub fn configure_logging(level: &Option<String>) -> Result<()> {
    let filter = resolve_filter(level, std::env::var("RUST_LOG").ok());

    let mut builder = pretty_env_logger::formatted_builder();
    builder.parse_filters(&filter);
    builder.try_init()?;
    Ok(())
}

fn resolve_filter(level: &Option<String>, env: Option<String>) -> String {
    level
        .clone()
        .or(env)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_filter() {
        let explicit = Some("debug".to_string());
        assert_eq!(resolve_filter(&explicit, Some("warn".to_string())), "debug");
        assert_eq!(resolve_filter(&None, Some("strpack=trace".to_string())), "strpack=trace");
        assert_eq!(resolve_filter(&None, None), "info");
    }
}
