//! Prevtrans admin CLI - inspect the API with the same client the
//! front-end uses.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prevtrans_admin_lib::{AdminConfig, AppState};
use prevtrans_api::{AcidenteApi, AuthSession, JwtSession, UsuarioApi};

#[derive(Parser)]
#[command(name = "prevtrans-admin")]
#[command(about = "Prevtrans admin front-end tooling")]
struct Cli {
    /// Bearer token issued by the login flow
    #[arg(long, env = "PREVTRANS_TOKEN")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the authenticated principal's profile
    Perfil,
    /// List all users
    Usuarios,
    /// List traffic-accident records
    Acidentes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AdminConfig::from_env();
    let session = Arc::new(JwtSession::from_token(&cli.token)?);
    let state = AppState::from_config(config, session)?;

    match cli.command {
        Commands::Perfil => {
            let usuario = state.usuarios.get_usuario(state.session.id_usuario()).await?;
            println!("{}", serde_json::to_string_pretty(&usuario)?);
        }
        Commands::Usuarios => {
            let usuarios = state.usuarios.usuarios().await?;
            println!("{}", serde_json::to_string_pretty(&usuarios)?);
        }
        Commands::Acidentes => {
            let acidentes = state.acidentes.acidentes().await?;
            println!("{}", serde_json::to_string_pretty(&acidentes)?);
        }
    }

    Ok(())
}
