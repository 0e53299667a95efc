//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and a non-zero exit code that identifies the failing stage.

use std::fmt;
use std::process;

use geopin::provider::ProviderError;
use geopin::session::StartupError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to build the async runtime
    Runtime(String),
    /// Failed to install the signal handler
    SignalHandler(String),
    /// Could not reach the location service
    Provider(ProviderError),
    /// Session startup failed (creation, configuration, subscription, start)
    Startup(StartupError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Provider(ProviderError::Unavailable(_)) => {
                eprintln!();
                eprintln!("Is the location service running?");
                eprintln!("  1. GeoClue2 must be installed (package 'geoclue-2.0' on most distros)");
                eprintln!("  2. Check the service: systemctl status geoclue");
                eprintln!("  3. The D-Bus system bus must be reachable");
            }
            CliError::Startup(StartupError::Configure(_)) => {
                eprintln!();
                eprintln!("The provider refused the requested accuracy level.");
                eprintln!("Try a coarser level, e.g. --accuracy city");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Runtime(msg) => write!(f, "Failed to build runtime: {}", msg),
            CliError::SignalHandler(msg) => write!(f, "Failed to set signal handler: {}", msg),
            CliError::Provider(e) => write!(f, "Location provider unreachable: {}", e),
            CliError::Startup(e) => write!(f, "Session startup failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Provider(e) => Some(e),
            CliError::Startup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StartupError> for CliError {
    fn from(e: StartupError) -> Self {
        CliError::Startup(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_identifies_provider_stage() {
        let err = CliError::Provider(ProviderError::Unavailable("no bus".to_string()));
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn test_display_identifies_startup_stage() {
        let err = CliError::Startup(StartupError::Subscribe(ProviderError::SubscriptionFailed(
            "no signals".to_string(),
        )));
        let text = err.to_string();
        assert!(text.contains("startup failed"));
        assert!(text.contains("subscription failed"));
    }

    #[test]
    fn test_source_chain() {
        let err = CliError::Startup(StartupError::Configure(
            ProviderError::ConfigurationRejected("denied".to_string()),
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
