//! `portfolio` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`  — start the API server.
//! - `photo`  — run a single photo operation against the database.
//!
//! The database URL comes from `POSTGRES_URL` (or `DATABASE_URL`), optionally
//! via a `.env` file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::repository::photos;
use db::{DbPool, NewPhoto};

#[derive(Parser)]
#[command(
    name = "portfolio",
    about = "Photography portfolio backend",
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
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Manage photos directly.
    #[command(subcommand)]
    Photo(PhotoCommand),
}

#[derive(Subcommand)]
enum PhotoCommand {
    /// Insert a photo and print its new id.
    Add {
        #[arg(long)]
        collage: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        link: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Print one photo as JSON.
    Get { id: i64 },
    /// Print all photos, or one collage's photos, as a JSON array.
    List {
        #[arg(long)]
        collage: Option<i64>,
    },
    /// Delete a photo by id.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let pool = db::pool::connect_from_env()
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Serve { bind } => {
            info!("Starting API server on {bind}");
            api::serve(&bind, pool).await.context("API server failed")?;
        }
        Command::Photo(cmd) => run_photo(cmd, &pool).await?,
    }

    Ok(())
}

async fn run_photo(cmd: PhotoCommand, pool: &DbPool) -> anyhow::Result<()> {
    match cmd {
        PhotoCommand::Add { collage, name, link, description } => {
            let photo = NewPhoto { collage_id: collage, name, link, description };
            let id = photos::insert_photo(pool, &photo)
                .await
                .context("failed to insert photo")?;
            println!("{id}");
        }
        PhotoCommand::Get { id } => {
            match photos::get_photo(pool, id).await.context("failed to fetch photo")? {
                Some(photo) => println!("{}", serde_json::to_string_pretty(&photo)?),
                None => {
                    eprintln!("No photo with id {id}");
                    std::process::exit(1);
                }
            }
        }
        PhotoCommand::List { collage } => {
            let rows = match collage {
                Some(collage_id) => photos::list_photos_by_collage(pool, collage_id).await,
                None => photos::list_photos(pool).await,
            }
            .context("failed to list photos")?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        PhotoCommand::Delete { id } => {
            let deleted = photos::delete_photo(pool, id)
                .await
                .context("failed to delete photo")?;
            if deleted {
                println!("Deleted photo {id}");
            } else {
                println!("No photo with id {id}; nothing deleted");
            }
        }
    }

    Ok(())
}
