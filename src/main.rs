use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default if no subcommand)
    Serve,
    /// Score a receipt JSON file and print its id and points
    Score {
        /// Path to the receipt JSON file
        file: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "receipt-points")]
#[command(about = "Receipt scoring service", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/receipt-points/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Listen host, overrides the config file
    #[arg(long, global = true)]
    host: Option<String>,

    /// Listen port, overrides the config file
    #[arg(long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    init_logging(cli.verbose);

    match command {
        Commands::Serve => {
            let config_path = cli.config.map(PathBuf::from);
            let mut config = match receipt_points::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            if let Some(host) = cli.host {
                config.host = host;
            }
            if let Some(port) = cli.port {
                config.port = port;
            }

            if let Err(errors) = receipt_points::config::validate_config(&config) {
                eprintln!("Config errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            tracing::debug!(?config, "Loaded config");

            let state = receipt_points::api::AppState::default();
            let (router, addr) = match receipt_points::api::create_server(&config, state) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let listener = match receipt_points::api::bind(addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("{:#}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            };

            if let Err(e) = receipt_points::api::serve(listener, router).await {
                tracing::error!("{:#}", e);
                std::process::exit(EXIT_NETWORK);
            }
        }
        Commands::Score { file } => {
            let (id, receipt) = match receipt_points::receipt::read_receipt_file(&file) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Receipt error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let result = receipt_points::scoring::calculate_points(&receipt);

            println!("id: {}", id);
            println!("points: {}", result.points);

            if cli.verbose {
                println!();
                for line in result.breakdown.format_lines() {
                    println!("{}", line);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Initialize logging with tracing. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "receipt_points=debug,tower_http=debug"
    } else {
        "receipt_points=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
