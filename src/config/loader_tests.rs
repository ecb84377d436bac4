//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

// ===== Paths =====

#[test]
fn default_config_path_contains_ruv_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("ruv") && path_str.ends_with("config.toml"),
        "Path should contain 'ruv' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_ruv_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("ruv.log"),
        "Default log path should end with 'ruv.log', got: {:?}",
        path
    );
}

// ===== File loading =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_every_key() {
    let path = write_temp_config(
        "ruv_test_full_config.toml",
        r#"
base_url = "http://localhost:8080/api/"
page_size = 25
seed = "abc"
request_timeout_secs = 5
default_filter = "female"
default_style = "double"
load_more_threshold = 3
log_file_path = "/tmp/ruv-test.log"
"#,
    );

    let config = load_config_file(&path).unwrap().expect("file exists");

    assert_eq!(
        config,
        ConfigFile {
            base_url: Some("http://localhost:8080/api/".to_string()),
            page_size: Some(25),
            seed: Some("abc".to_string()),
            request_timeout_secs: Some(5),
            default_filter: Some(Category::Female),
            default_style: Some(ListStyle::Double),
            load_more_threshold: Some(3),
            log_file_path: Some(PathBuf::from("/tmp/ruv-test.log")),
        }
    );

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = write_temp_config("ruv_test_invalid.toml", "page_size = [not toml");

    let result = load_config_file(&path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a parse error, got {result:?}"
    );
    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_zero_page_size() {
    let path = write_temp_config("ruv_test_zero_page.toml", "page_size = 0\n");

    let result = load_config_file(&path);

    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "page_size",
                ..
            })
        ),
        "Zero page size should be rejected, got {result:?}"
    );
    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_rejects_zero_timeout() {
    let path = write_temp_config("ruv_test_zero_timeout.toml", "request_timeout_secs = 0\n");

    let result = load_config_file(&path);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            key: "request_timeout_secs",
            ..
        })
    ));
    fs::remove_file(path).ok();
}

#[test]
fn validate_accepts_positive_values() {
    let config = ConfigFile {
        page_size: Some(1),
        request_timeout_secs: Some(1),
        ..ConfigFile::default()
    };
    assert_eq!(config.validate(Path::new("config.toml")), Ok(()));
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn config_file_rejects_unknown_filter() {
    let result: Result<ConfigFile, _> = toml::from_str("default_filter = \"other\"");
    assert!(result.is_err());
}

#[test]
fn load_config_file_handles_partial_config() {
    let path = write_temp_config("ruv_test_partial.toml", "page_size = 50\n");

    let config = load_config_file(&path).unwrap().unwrap();

    assert_eq!(config.page_size, Some(50));
    assert_eq!(config.base_url, None);
    fs::remove_file(path).ok();
}

// ===== Merging =====

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.base_url, "https://randomuser.me/api/");
    assert_eq!(config.page_size, 10);
    assert_eq!(config.seed, None);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.default_filter, Category::All);
    assert_eq!(config.default_style, ListStyle::Single);
    assert_eq!(config.load_more_threshold, 1);
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        page_size: Some(5),
        request_timeout_secs: Some(2),
        default_style: Some(ListStyle::Double),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.page_size, 5);
    assert_eq!(resolved.request_timeout, Duration::from_secs(2));
    assert_eq!(resolved.default_style, ListStyle::Double);
    assert_eq!(resolved.base_url, ResolvedConfig::default().base_url);
}

#[test]
fn source_config_carries_connection_settings() {
    let resolved = ResolvedConfig {
        seed: Some("s".to_string()),
        page_size: 7,
        ..ResolvedConfig::default()
    };

    let source = resolved.source_config();

    assert_eq!(source.page_size, 7);
    assert_eq!(source.seed.as_deref(), Some("s"));
    assert_eq!(source.base_url, resolved.base_url);
    assert_eq!(source.timeout, resolved.request_timeout);
}

// ===== Environment =====

#[test]
#[serial(ruv_env)]
fn apply_env_overrides_respects_base_url_and_seed() {
    let _url = EnvGuard::new(BASE_URL_ENV);
    let _seed = EnvGuard::new(SEED_ENV);
    env::set_var(BASE_URL_ENV, "http://127.0.0.1:9/api/");
    env::set_var(SEED_ENV, "fixed");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.base_url, "http://127.0.0.1:9/api/");
    assert_eq!(result.seed.as_deref(), Some("fixed"));
    assert_eq!(result.page_size, 10);
}

#[test]
#[serial(ruv_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _url = EnvGuard::new(BASE_URL_ENV);
    let _seed = EnvGuard::new(SEED_ENV);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(ruv_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let explicit = write_temp_config("ruv_test_explicit.toml", "page_size = 11\n");
    let from_env = write_temp_config("ruv_test_env.toml", "page_size = 22\n");
    env::set_var(CONFIG_ENV, from_env.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(config.page_size, Some(11));
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(ruv_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    let from_env = write_temp_config("ruv_test_env_only.toml", "page_size = 33\n");
    env::set_var(CONFIG_ENV, from_env.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(config.page_size, Some(33));
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(ruv_config)]
fn load_config_with_precedence_missing_env_file_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV);
    env::set_var(CONFIG_ENV, "/nonexistent/ruv/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
fn apply_cli_overrides_replaces_given_values() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            filter: Some(Category::Male),
            style: Some(ListStyle::Double),
            seed: Some("cli".to_string()),
            page_size: Some(3),
        },
    );

    assert_eq!(result.default_filter, Category::Male);
    assert_eq!(result.default_style, ListStyle::Double);
    assert_eq!(result.seed.as_deref(), Some("cli"));
    assert_eq!(result.page_size, 3);
}

#[test]
#[serial(ruv_env)]
fn precedence_chain_file_then_env_then_cli() {
    let _seed = EnvGuard::new(SEED_ENV);
    let _url = EnvGuard::new(BASE_URL_ENV);

    let file = ConfigFile {
        seed: Some("file".to_string()),
        page_size: Some(20),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file));
    assert_eq!(merged.seed.as_deref(), Some("file"));

    env::set_var(SEED_ENV, "env");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.seed.as_deref(), Some("env"));
    assert_eq!(with_env.page_size, 20);

    let with_cli = apply_cli_overrides(
        with_env,
        CliOverrides {
            seed: Some("cli".to_string()),
            ..CliOverrides::default()
        },
    );
    assert_eq!(with_cli.seed.as_deref(), Some("cli"));
    assert_eq!(with_cli.page_size, 20);
}
