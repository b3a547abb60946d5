use anyhow::Result;
use clap::{Parser, Subcommand};
use recipebook_http::{AppState, create_router};
use recipebook_service::{IngredientService, RecipeService};
use recipebook_storage::Storage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Recipe and ingredient catalog with a JSON HTTP API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print all recipes with their ingredients as JSON
    Recipes,
    /// Print all ingredients as JSON
    Ingredients,
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("RECIPEBOOK_DB") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipebook")
        .join("recipes.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = Arc::new(Storage::new(&db_path).await?);

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState {
                ingredients: IngredientService::new(Arc::clone(&storage)),
                recipes: RecipeService::new(Arc::clone(&storage)),
            });
            let router = create_router(state);
            let addr = format!("{}:{}", host, port);
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        }
        Commands::Recipes => {
            let recipes = RecipeService::new(Arc::clone(&storage)).list().await?;
            println!("{}", serde_json::to_string_pretty(&recipes)?);
        }
        Commands::Ingredients => {
            let ingredients = IngredientService::new(Arc::clone(&storage)).list().await?;
            println!("{}", serde_json::to_string_pretty(&ingredients)?);
        }
    }

    storage.close().await;
    Ok(())
}
