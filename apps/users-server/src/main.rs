use anyhow::Result;
use api_ingress::{ApiIngress, ApiIngressConfig};
use axum::Router;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::{Path, PathBuf};
use users_info::{config::UsersInfoConfig, UsersInfo};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Users Server - in-memory users API over a controller/service/repository stack
#[derive(Parser)]
#[command(name = "users-server")]
#[command(about = "Users Server - in-memory users API over a controller/service/repository stack")]
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

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Users Server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

struct ModuleConfigs {
    api_ingress: ApiIngressConfig,
    users_info: UsersInfoConfig,
}

fn module_configs(config: &AppConfig) -> Result<ModuleConfigs> {
    Ok(ModuleConfigs {
        api_ingress: config.module_config("api_ingress")?,
        users_info: config.module_config(UsersInfo::NAME)?,
    })
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");
    let cfgs = module_configs(&config)?;

    let users = UsersInfo::new(&cfgs.users_info);
    let host = ApiIngress::new(cfgs.api_ingress, config.bind_addr());
    let router = host.build_router(users.register_rest(Router::new()), Some(users.openapi()));

    let cancel = runtime::shutdown::shutdown_token();
    host.serve(router, cancel).await?;

    tracing::info!("Users Server stopped");
    Ok(())
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    module_configs(&config)?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Server config:");
    println!("{}", config.to_yaml()?);

    Ok(())
}
