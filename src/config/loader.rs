//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MascaraConfig;
use crate::domain::errors::MascaraError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MascaraConfig
/// 4. Applies environment variable overrides (MASCARA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`MascaraError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, parsing fails or validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use mascara::config::loader::load_config;
///
/// let config = load_config("mascara.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MascaraConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MascaraError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MascaraError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MascaraConfig = toml::from_str(&contents)?;

    finalize(&mut config)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Loads configuration from a TOML file, falling back to defaults if the file
/// does not exist
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<MascaraConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = MascaraConfig::default();
    finalize(&mut config)?;
    Ok(config)
}

fn finalize(config: &mut MascaraConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        MascaraError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed_line = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MascaraError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MASCARA_* prefix
///
/// Environment variables follow the pattern: MASCARA_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut MascaraConfig) -> Result<()> {
    if let Ok(val) = std::env::var("MASCARA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| MascaraError::Configuration(format!("{e:#}")))?;

    if let Ok(val) = std::env::var("MASCARA_OUTPUT_REPORT_FORMAT") {
        config.output.report_format = val.parse().map_err(MascaraError::Configuration)?;
    }

    if let Ok(val) = std::env::var("MASCARA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            MascaraError::Configuration(format!(
                "Invalid MASCARA_LOGGING_LOCAL_ENABLED value: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("MASCARA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes tests that read or write process environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_substitute_env_vars() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("MASCARA_TEST_LOG_DIR", "/var/log/mascara");

        let input = "local_path = \"${MASCARA_TEST_LOG_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "local_path = \"/var/log/mascara\"\n");

        std::env::remove_var("MASCARA_TEST_LOG_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("MASCARA_TEST_MISSING_VAR");

        let result = substitute_env_vars("x = \"${MASCARA_TEST_MISSING_VAR}\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("MASCARA_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# path = \"${MASCARA_TEST_UNSET_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${MASCARA_TEST_UNSET_IN_COMMENT}"));
    }

    #[test]
    fn test_load_config_from_file() {
        let _lock = ENV_MUTEX.lock().unwrap();

        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[application]
log_level = "debug"

[anonymization]
anonymize_names = true
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert!(config.anonymization.anonymize_names);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/mascara.toml");
        assert!(matches!(result, Err(MascaraError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let _lock = ENV_MUTEX.lock().unwrap();

        let config = load_config_or_default("/nonexistent/mascara.toml").unwrap();
        assert!(!config.anonymization.anonymize_names);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[application\nlog_level = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
