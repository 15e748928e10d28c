//! Logging setup
//!
//! `log` facade backed by `env_logger`. The CLI verbosity picks the default
//! filter; `RUST_LOG` always wins when set.

use crate::cli::Verbosity;

/// Filter string for the given verbosity and optional RUST_LOG value
pub fn resolve_filter(verbosity: Verbosity, env_filter: Option<&str>) -> String {
    match env_filter {
        Some(filter) if !filter.trim().is_empty() => filter.to_string(),
        _ => format!("dualcare={}", verbosity.log_filter()),
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let env_filter = std::env::var("RUST_LOG").ok();
    let filter = resolve_filter(verbosity, env_filter.as_deref());

    let _ = env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(resolve_filter(Verbosity::Quiet, None), "dualcare=error");
        assert_eq!(resolve_filter(Verbosity::Verbose, None), "dualcare=info");
    }

    #[test]
    fn test_env_overrides() {
        assert_eq!(resolve_filter(Verbosity::Quiet, Some("trace")), "trace");
        assert_eq!(resolve_filter(Verbosity::Normal, Some(" ")), "dualcare=warn");
    }

    #[test]
    fn test_init_twice() {
        init(Verbosity::Normal);
        init(Verbosity::VeryVerbose);
    }
}
