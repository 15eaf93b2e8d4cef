//! `staff-directory` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — create the schema if it does not exist yet.
//!
//! Settings are read from flags, then the environment, then `.env`.

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use db::{
    pool::{self, PgConnectOptions},
    DbSettings,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "staff-directory",
    about = "Employee records and organisation lookups over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (all interfaces).
        #[arg(long = "port", env = "SERVER_PORT", default_value_t = 8080)]
        port: u16,
        /// Full bind address; overrides `--port`.
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Apply the schema bootstrap before serving.
        #[arg(long)]
        migrate: bool,
        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Create the schema if it does not exist yet.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    /// Full connection URL; takes precedence over the `DB_*` settings.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    db_host: String,
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    db_user: String,
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    db_password: String,
    #[arg(long, env = "DB_NAME", default_value = "staff_directory")]
    db_name: String,
    #[arg(long, env = "DB_SSLMODE", default_value = "disable")]
    db_sslmode: String,
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    db_max_connections: u32,
}

impl DatabaseArgs {
    fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        let options = match &self.database_url {
            Some(url) if !url.is_empty() => {
                pool::options_from_url(url).context("invalid DATABASE_URL")?
            }
            _ => DbSettings {
                host: self.db_host.clone(),
                port: self.db_port,
                user: self.db_user.clone(),
                password: self.db_password.clone(),
                name: self.db_name.clone(),
                ssl_mode: self.db_sslmode.clone(),
            }
            .connect_options()
            .context("invalid DB_* settings")?,
        };
        Ok(options)
    }

    async fn connect(&self) -> anyhow::Result<db::DbPool> {
        let pool = pool::create_pool(self.connect_options()?, self.db_max_connections)
            .await
            .context("failed to connect to database")?;
        Ok(pool)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, bind, migrate, database } => {
            let pool = database.connect().await?;
            if migrate {
                pool::run_migrations(&pool).await.context("migration failed")?;
            }
            let addr = bind.unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
            info!("Starting API server on {addr}");
            api::serve(addr, pool).await.context("server error")?;
        }
        Command::Migrate { database } => {
            let pool = database.connect().await?;
            pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}
