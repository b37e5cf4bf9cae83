//! AI service entry point
//!
//! Configuration comes from `AI_*` environment variables (optionally read
//! from a `.env` file); command line flags override the bind address, the
//! worker count and the log level.

use clap::Parser;
use shared::{ServiceConfig, SharedError, logging};

use ai_service::{AiServer, OutlierCapability, OutlierDetector, ServiceResult};

const SERVICE_NAME: &str = "ai-service";

#[derive(Parser, Debug)]
#[command(name = "ai-service")]
#[command(about = "Lead scoring, A/B selection, anomaly detection, copy and pricing over HTTP")]
struct Args {
    /// Bind host (overrides AI_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides AI_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Runtime worker threads (overrides AI_WORKERS)
    #[arg(long)]
    workers: Option<usize>,

    /// Log level: trace, debug, info, warn, error (overrides AI_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, mut config: ServiceConfig) -> ServiceResult<ServiceConfig> {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(SharedError::InvalidConfig {
                    field: "--workers".to_string(),
                    value: workers.to_string(),
                }
                .into());
            }
            config.workers = workers;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level.to_lowercase();
        }
        Ok(config)
    }
}

fn main() -> ServiceResult<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = args.apply(ServiceConfig::from_env()?)?;

    logging::init_tracing(&config.log_level);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: ServiceConfig) -> ServiceResult<()> {
    let detector = OutlierCapability::from_config(&config);

    logging::log_startup(
        SERVICE_NAME,
        &format!(
            "{} v{} on {}:{} ({} workers, iforest: {})",
            config.app_name,
            config.app_version,
            config.host,
            config.port,
            config.workers,
            detector.is_available()
        ),
    );

    let server = AiServer::new(config, detector);
    if let Err(err) = server.run().await {
        logging::log_error(SERVICE_NAME, "Server", &err);
        return Err(err);
    }

    logging::log_success(SERVICE_NAME, "Server stopped gracefully");
    Ok(())
}
