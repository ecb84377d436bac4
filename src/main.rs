//! Random User Viewer - Entry Point

use clap::Parser;
use ruv::config::CliOverrides;
use ruv::coordinator::{self, CoordinatorOptions};
use ruv::model::{Category, ListStyle};
use ruv::source::RandomUserClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Random User Viewer - browse randomuser.me records in the terminal
#[derive(Parser, Debug)]
#[command(name = "ruv")]
#[command(version)]
#[command(about = "TUI application for browsing paginated random user records")]
pub struct Args {
    /// Filter tab to open with (all, male, female)
    #[arg(long)]
    pub filter: Option<Category>,

    /// List layout to open with (single, double)
    #[arg(long)]
    pub style: Option<ListStyle>,

    /// Fixed seed so that pages are stable across requests
    #[arg(long)]
    pub seed: Option<String>,

    /// Records per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            filter: self.filter,
            style: self.style,
            seed: self.seed.clone(),
            page_size: self.page_size,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Color handling reads NO_COLOR everywhere
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = ruv::config::load_config_with_precedence(args.config.clone())?;
        let merged = ruv::config::merge_config(config_file);
        let with_env = ruv::config::apply_env_overrides(merged);
        ruv::config::apply_cli_overrides(with_env, args.overrides())
    };

    ruv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let client = RandomUserClient::new(config.source_config())?;
    let runtime = tokio::runtime::Runtime::new()?;

    // The TUI blocks on delete acknowledgments, so it runs outside the runtime
    let handle = {
        let _guard = runtime.enter();
        coordinator::spawn(
            Arc::new(client),
            CoordinatorOptions {
                filter: config.default_filter,
                style: config.default_style,
            },
        )
    };

    ruv::view::run(handle, config.load_more_threshold)?;

    info!("Shutting down");
    runtime.shutdown_background();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["ruv", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["ruv", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["ruv"]);
        assert_eq!(args.filter, None);
        assert_eq!(args.style, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.page_size, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_filter_and_style_parse() {
        let args = Args::parse_from(["ruv", "--filter", "female", "--style", "double"]);
        assert_eq!(args.filter, Some(Category::Female));
        assert_eq!(args.style, Some(ListStyle::Double));
    }

    #[test]
    fn test_filter_invalid_rejects() {
        let result = Args::try_parse_from(["ruv", "--filter", "other"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["ruv", "--page-size", "0"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_seed_and_config_path() {
        let args = Args::parse_from(["ruv", "--seed", "abc", "--config", "/custom/config.toml"]);
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_overrides_flow_through_precedence_chain() {
        use ruv::config::{apply_cli_overrides, merge_config, ConfigFile};

        let file = ConfigFile {
            page_size: Some(40),
            default_filter: Some(Category::Male),
            ..ConfigFile::default()
        };
        let args = Args::parse_from(["ruv", "--page-size", "5"]);

        let resolved = apply_cli_overrides(merge_config(Some(file)), args.overrides());

        assert_eq!(resolved.page_size, 5, "CLI should override the config file");
        assert_eq!(resolved.default_filter, Category::Male);
    }
}
