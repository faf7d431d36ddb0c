/// Runtime configuration for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON instead of plain text on stdout.
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_output: false,
        }
    }
}
