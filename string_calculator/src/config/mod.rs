//! Configuration module for the string calculator
//! Automatically uses generated constants from TOML configuration

// Include generated constants from build.rs
// This file is generated at compile time from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("STRCALC_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("STRCALC_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::{evaluation, logging};

    #[test]
    fn test_generated_evaluation_constants() {
        assert!(evaluation::MAX_VALUE >= 0);
        assert!(evaluation::DEFAULT_DELIMITERS.contains(&"\n"));
        assert!(evaluation::DEFAULT_DELIMITERS.iter().all(|d| !d.is_empty()));
    }

    #[test]
    fn test_generated_logging_constants() {
        assert!(logging::LOG_BUFFER_SIZE > 0);
        assert!(logging::MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_source_info() {
        assert!(super::build_info::source_info().ends_with(".toml"));
    }
}
