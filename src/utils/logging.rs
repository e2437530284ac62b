//! Logging setup.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,timnha=info";

/// Installs the global logger. Safe to call more than once; later calls are ignored.
pub fn init() {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized");
    }
}

/// Masks a credential for log output, keeping only its length.
pub fn redact(secret: &str) -> String {
    format!("<redacted:{}>", secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }

    #[test]
    fn redact_hides_content() {
        let masked = redact("abc123");
        assert_eq!(masked, "<redacted:6>");
        assert!(!masked.contains("abc"));
    }
}
