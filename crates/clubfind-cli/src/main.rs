mod extract;
mod render;
mod search;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "clubfind-cli")]
#[command(about = "Natural-language golf club search, from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one search: resolve the query, compile the catalog URL, extract
    /// the first page of results.
    Search {
        /// The natural-language query, e.g. "used ping g430 driver under $400".
        query: String,
        /// Club category slug (driver, fairway, hybrid, ironset, singleiron,
        /// wedge, putter, utilityiron).
        #[arg(long)]
        category: String,
        /// Print the full outcome as JSON instead of the rendered view.
        #[arg(long)]
        json: bool,
    },
    /// Extract product listings from already-compiled catalog URLs.
    Extract {
        /// Catalog listing URLs to fetch and parse.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Print each page's extraction as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the club categories and their search-box hints.
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = clubfind_core::load_app_config()?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            category,
            json,
        } => search::run(&config, &query, &category, json).await,
        Commands::Extract { urls, json } => extract::run(&config, &urls, json).await,
        Commands::Categories => {
            let refdata = clubfind_core::RefData::load(&config.refdata_path);
            for category in clubfind_core::ClubCategory::ALL {
                match refdata.placeholder_hint(category) {
                    Some(hint) => println!("{:<12} {}  e.g. \"{hint}\"", category.slug(), category),
                    None => println!("{:<12} {}", category.slug(), category),
                }
            }
            Ok(())
        }
    }
}
