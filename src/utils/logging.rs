use tracing_subscriber::EnvFilter;

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        eprintln!("Verbose: {}", msg);
    }
}

/// Verbose output switch for the CLI.
///
/// [`VerboseLogger::install`] also sets up a `tracing` subscriber on stderr.
/// Its `log` bridge picks up the library's records. `RUST_LOG` overrides the
/// filter derived from `--verbose`.
#[derive(Debug, Clone, Copy)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Filter used when `RUST_LOG` is unset: library debug output in verbose
    /// mode, warnings and errors otherwise.
    pub fn default_directive(&self) -> &'static str {
        if self.enabled {
            "nebula_sdk=debug"
        } else {
            "nebula_sdk=warn"
        }
    }

    pub fn install(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()));

        // Fails only when a global subscriber is already set
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
        {
            print_verbose(self.enabled, &format!("Logging not initialized: {}", e));
        }
    }
}
