//! CLI for vanity-pages.
//!
//! Renders one vanity import page per Go package, either for the repositories
//! of a GitHub account or for a package list read from a config file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vanity_pages::{
    RunSummary, Runner, RunnerConfig, RunnerError, SiteConfig, DEFAULT_OUT_DIR,
    DEFAULT_TEMPLATE_PATH,
};

/// Vanity Pages - Generate vanity import path pages for Go packages.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory.
    #[arg(long, default_value = DEFAULT_OUT_DIR, global = true)]
    out: PathBuf,

    /// Page template (Handlebars, sees Domain, Package, Repository and Account).
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH, global = true)]
    template: PathBuf,

    #[command(subcommand)]
    source: Source,
}

#[derive(Subcommand, Debug)]
enum Source {
    /// Generate pages for the Go repositories of GITHUB_ACTOR under DOMAIN_NAME.
    Github {
        /// GitHub token for the listing call.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Emit one page per repository instead of one per directory.
        #[arg(long)]
        no_discover: bool,

        /// Directory to create scratch clones under.
        #[arg(long)]
        scratch_dir: Option<PathBuf>,

        /// Base URI of a GitHub-compatible API.
        #[arg(long)]
        api_base: Option<String>,
    },

    /// Generate pages for the packages listed in a JSON config file.
    Config {
        /// Path to the config file.
        #[arg(long, default_value = "./config.json")]
        cfg: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let start = Instant::now();

    // Initialize tracing
    init_tracing();

    // Both ring and aws-lc-rs may be compiled in; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            println!("Done in {:?}!", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.out, args.template);

    let site = match args.source {
        Source::Github {
            token,
            no_discover,
            scratch_dir,
            api_base,
        } => {
            config = config.with_discovery(!no_discover);
            if let Some(token) = token {
                config = config.with_token(token);
            }
            if let Some(scratch_dir) = scratch_dir {
                config = config.with_scratch_root(scratch_dir);
            }
            if let Some(api_base) = api_base {
                config = config.with_api_base(api_base);
            }
            SiteConfig::from_env()?
        }
        Source::Config { cfg } => SiteConfig::load_file(&cfg)?,
    };

    let runner = Runner::new(config, site)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    if summary.repositories_listed > 0 {
        println!("  Repositories listed: {}", summary.repositories_listed);
        println!("  Repositories skipped: {}", summary.repositories_skipped);
        println!(
            "  Repositories processed: {}",
            summary.repositories_processed
        );
    }
    println!("  Pages written: {}", summary.pages_written);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use vanity_pages::{ConfigError, ACCOUNT_ENV, DOMAIN_ENV};

    /// Writes a valid template so only the configuration can fail.
    fn write_template(dir: &Path) -> PathBuf {
        let path = dir.join("template.html");
        fs::write(&path, "{{Domain}}/{{Package}}").unwrap();
        path
    }

    fn parse(temp: &TempDir, source: &[&str]) -> Args {
        let out = temp.path().join("out");
        let template = write_template(temp.path());
        let mut argv = vec![
            "vanity-pages".to_string(),
            "--out".to_string(),
            out.display().to_string(),
            "--template".to_string(),
            template.display().to_string(),
        ];
        argv.extend(source.iter().map(|arg| arg.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn missing_config_file_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let cfg = temp.path().join("config.json");
        let args = parse(&temp, &["config", "--cfg", &cfg.display().to_string()]);

        let result = run(args).await;

        assert!(matches!(
            result,
            Err(RunnerError::Config(ConfigError::MissingFile { .. }))
        ));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn missing_domain_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let args = parse(&temp, &["github", "--no-discover"]);

        let result = temp_env::with_vars(
            [(DOMAIN_ENV, None), (ACCOUNT_ENV, Some("octo"))],
            || {
                tokio::runtime::Runtime::new()
                    .unwrap()
                    .block_on(run(args))
            },
        );

        assert!(matches!(
            result,
            Err(RunnerError::Config(ConfigError::MissingEnv { name: DOMAIN_ENV }))
        ));
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn config_flags_use_defaults() {
        let args = Args::try_parse_from(["vanity-pages", "config"]).unwrap();

        assert_eq!(args.out, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(args.template, PathBuf::from(DEFAULT_TEMPLATE_PATH));
        assert!(matches!(args.source, Source::Config { ref cfg } if cfg == Path::new("./config.json")));
    }
}
