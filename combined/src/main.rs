//! User directory binary: HTTP server, store maintenance and a CLI client.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::{GatewayConfig, DEFAULT_PORT};
use user_client_lib::config::DEFAULT_API_URL;
use user_client_lib::{ClientConfig, HttpUserApi, LoadState, UserList};
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-directory")]
#[command(about = "Lists registered users over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Insert the sample users, skipping ones already present
    Seed,
    /// Fetch users from a running server and print them
    List {
        #[arg(long, env = "USER_API_URL", default_value = DEFAULT_API_URL)]
        url: String,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateAction> for user_service_lib::MigrateAction {
    fn from(action: MigrateAction) -> Self {
        match action {
            MigrateAction::Up => Self::Up,
            MigrateAction::Down => Self::Down,
            MigrateAction::Status => Self::Status,
            MigrateAction::Fresh => Self::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = GatewayConfig {
                host,
                port,
                ..GatewayConfig::from_env()
            };
            info!("Starting user directory on http://{}", config.server_addr());

            gateway_lib::run_embedded(config, UserServiceConfig::from_env()).await?;
        }
        Commands::Migrate { action } => {
            user_service_lib::run_migrations(action.into(), &UserServiceConfig::from_env())
                .await?;
        }
        Commands::Seed => {
            let report = user_service_lib::run_seed(&UserServiceConfig::from_env()).await?;
            println!(
                "Seeded {} users ({} already present)",
                report.inserted, report.skipped
            );
        }
        Commands::List { url } => {
            let api = HttpUserApi::from_config(&ClientConfig::with_api_url(url))?;
            let mut list = UserList::new();
            list.load_users(&api).await;

            print!("{list}");
            if list.state() == LoadState::Error {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
