// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    evaluation: EvaluationLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct EvaluationLimits {
    max_value: i64,
    default_delimiters: Vec<String>,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=STRCALC_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=STRCALC_CONFIG_DIR");

    let profile = env::var("STRCALC_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("STRCALC_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of string_calculator directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_LOG_BUFFER: usize = 100_000;

    if config.evaluation.max_value < 0 {
        panic!("CONFIG: evaluation.max_value must not be negative");
    }

    if config.evaluation.default_delimiters.is_empty() {
        panic!("CONFIG: evaluation.default_delimiters must not be empty");
    }

    if config
        .evaluation
        .default_delimiters
        .iter()
        .any(|d| d.is_empty())
    {
        panic!("CONFIG: evaluation.default_delimiters must not contain empty strings");
    }

    if !config
        .evaluation
        .default_delimiters
        .iter()
        .any(|d| d == "\n")
    {
        panic!("CONFIG: evaluation.default_delimiters must contain the newline delimiter");
    }

    if config.logging.log_buffer_size == 0
        || config.logging.log_buffer_size > ABSOLUTE_MAX_LOG_BUFFER
    {
        panic!("CONFIG: logging.log_buffer_size out of range");
    }

    if profile == "production" && config.logging.max_log_message_length > 4096 {
        panic!("PRODUCTION: max_log_message_length too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    // Debug formatting of each string yields a valid Rust string literal
    let delimiters = config
        .evaluation
        .default_delimiters
        .iter()
        .map(|d| format!("{:?}", d))
        .collect::<Vec<_>>()
        .join(", ");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod evaluation {{
        pub const MAX_VALUE: i64 = {};
        pub const DEFAULT_DELIMITERS: &[&str] = &[{}];
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.evaluation.max_value,
        delimiters,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
