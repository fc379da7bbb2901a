//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; user-facing output of the
//! command line stays on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,resource_scaffold=debug,resource_scaffold_cli_lib=debug"
    } else {
        "warn"
    }
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this more than once is
/// harmless: only the first subscriber is installed.
///
/// # Example
///
/// ```rust,no_run
/// use resource_scaffold::observability;
///
/// observability::init(true);
/// tracing::debug!("scaffolder started");
/// ```
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(verbose)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_err() {
        tracing::trace!("subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("resource_scaffold=debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
