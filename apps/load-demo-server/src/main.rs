use anyhow::{Context, Result};
use api_ingress::{ApiIngress, ApiIngressConfig};
use axum::Router;
use clap::{Parser, Subcommand};
use load_demo::{LoadDemo, LoadDemoConfig};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::{Path, PathBuf};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Load Demo Server - single CPU-bound endpoint for load testing
#[derive(Parser)]
#[command(name = "load-demo-server")]
#[command(about = "Load Demo Server - single CPU-bound endpoint for load testing")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

// The worker count comes from config, so the runtime is built by hand.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Load Demo Server starting");

    let cfgs = module_configs(&config)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let workers = cfgs.load_demo.worker_threads.max(1);
            tracing::info!(worker_threads = workers, "Building Tokio runtime");
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(workers)
                .enable_all()
                .build()
                .context("Failed to build Tokio runtime")?;
            rt.block_on(run_server(config, cfgs))
        }
        Commands::Check => check_config(config),
    }
}

struct ModuleConfigs {
    api_ingress: ApiIngressConfig,
    load_demo: LoadDemoConfig,
}

fn module_configs(config: &AppConfig) -> Result<ModuleConfigs> {
    let api_ingress = if config.modules.contains_key("api_ingress") {
        config.module_config("api_ingress")?
    } else {
        // Slow responses are the point of the demo; no timeout unless configured.
        ApiIngressConfig {
            request_timeout_secs: 0,
            ..Default::default()
        }
    };

    Ok(ModuleConfigs {
        api_ingress,
        load_demo: config.module_config(LoadDemo::NAME)?,
    })
}

async fn run_server(config: AppConfig, cfgs: ModuleConfigs) -> Result<()> {
    let demo = LoadDemo::new(cfgs.load_demo);
    let host = ApiIngress::new(cfgs.api_ingress, config.bind_addr());
    let router = host.build_router(demo.register_rest(Router::new()), Some(demo.openapi()));

    let cancel = runtime::shutdown::shutdown_token();
    host.serve(router, cancel).await?;

    tracing::info!("Load Demo Server stopped");
    Ok(())
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
