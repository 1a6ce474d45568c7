/// Roster Server - user signup, login and CRUD over HTTP
use chrono::Utc;
use clap::{Parser, Subcommand};
use roster_core::{types::NewUser, UserStorage};
use roster_server::{config::ServerConfig, create_router, AppState, PasswordHasher};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Sign a new user up
    AddUser {
        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            name,
            username,
            email,
            password,
        } => {
            add_user(config, name, username, email, &password).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Schema must be current before the first request is handled
    let storage = roster_storage::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let password_hasher = Arc::new(PasswordHasher::new(config.auth.bcrypt_cost));
    let app_state = AppState::new(Arc::new(storage), password_hasher);

    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: ServerConfig,
    name: String,
    username: String,
    email: String,
    password: &str,
) -> anyhow::Result<()> {
    let storage = roster_storage::connect(&config.storage.database_url).await?;
    let password_hasher = PasswordHasher::new(config.auth.bcrypt_cost);

    let password_hash = password_hasher.hash_password(password).await?;

    let user = storage
        .create_user(NewUser {
            name,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        })
        .await
        .map_err(|e| {
            if e.is_duplicate() {
                anyhow::anyhow!("username or email already taken")
            } else {
                anyhow::Error::new(e)
            }
        })?;

    println!("Created user {} ({})", user.id, user.username);

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let storage = roster_storage::connect(&config.storage.database_url).await?;

    let users = storage.list_users().await?;

    println!("Users ({}):", storage.count_users().await?);
    for user in users {
        println!(
            "  {} - {} <{}> {} (created {})",
            user.id,
            user.username,
            user.email,
            user.name,
            user.created_at.to_rfc3339()
        );
    }

    Ok(())
}
