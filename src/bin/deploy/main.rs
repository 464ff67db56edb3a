use anyhow::{Context, Result};
use clap::Parser;
use spaces_deploy::{
    app::{AppBuilder, AppConfig, StorageBackend, ENV_ACCESS_KEY, ENV_BUCKET, ENV_SECRET_KEY},
    SpacesConfig,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "spaces-deploy")]
#[command(about = "Upload a static site directory to a DigitalOcean Space", long_about = None)]
struct Cli {
    /// Spaces access key
    #[arg(long, env = ENV_ACCESS_KEY, hide_env_values = true)]
    key: Option<String>,

    /// Spaces secret key
    #[arg(long, env = ENV_SECRET_KEY, hide_env_values = true)]
    secret: Option<String>,

    /// Bucket (Space) to deploy into; created if missing
    #[arg(long, env = ENV_BUCKET)]
    bucket: String,

    /// Site directory, defaults to the current working directory
    #[arg(long)]
    root: Option<PathBuf>,

    /// Validate and upload into memory instead of Spaces
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let storage_backend = if self.dry_run {
            StorageBackend::InMemory
        } else {
            let key = self
                .key
                .clone()
                .with_context(|| {
                    format!("{} is required unless --dry-run is given", ENV_ACCESS_KEY)
                })?;
            let secret = self
                .secret
                .clone()
                .with_context(|| {
                    format!("{} is required unless --dry-run is given", ENV_SECRET_KEY)
                })?;
            StorageBackend::Spaces(SpacesConfig::new(key, secret))
        };

        Ok(AppConfig {
            storage_backend,
            bucket: self.bucket.clone(),
        })
    }

    /// Absolute site directory, resolved once
    fn site_root(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("could not determine working directory")?;
        Ok(match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd,
        })
    }

    fn init_logging(&self) -> Result<()> {
        let env_filter = match self.log_level.to_lowercase().as_str() {
            level @ ("trace" | "debug" | "info" | "warn" | "error") => level.to_string(),
            _ => "info".to_string(),
        };

        tracing_subscriber::registry()
            .with(EnvFilter::try_new(&env_filter).context("invalid log filter")?)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
            .context("failed to initialise logging")?;

        Ok(())
    }
}

async fn run(cli: Cli) -> Result<()> {
    let root = cli.site_root()?;
    let config = cli.to_app_config()?;

    if cli.dry_run {
        info!("dry run: objects are kept in memory");
    }

    let service = AppBuilder::new()
        .with_config(config)
        .build()
        .context("failed to set up deployment")?;

    let report = service.deploy(&root).await?;

    info!(
        "deployed {} files ({} bytes) to bucket {}",
        report.object_count(),
        report.total_bytes(),
        report.bucket
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = cli.init_logging() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(cli).await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
