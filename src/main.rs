//! bookscout CLI
//!
//! Runs catalog searches and book lookups from the terminal using the same
//! services as the application.

use anyhow::{Context, Result};
use bookscout_lib::modules::catalog::application::{format_search_state, DetailsOutcome};
use bookscout_lib::modules::catalog::domain::{BookSummary, SearchState};
use bookscout_lib::shared::utils::logger::init_logger;
use bookscout_lib::shared::AppConfig;
use bookscout_lib::AppServices;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookscout")]
#[command(version)]
#[command(about = "Search the book catalog", long_about = None)]
struct Cli {
    /// Debug-level logging for bookscout itself
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search by free text and/or genre
    Search {
        /// Search words; empty searches the default shelf
        #[arg(allow_hyphen_values = true)]
        term: Vec<String>,

        /// Genre filter, e.g. fantasy
        #[arg(short, long)]
        genre: Option<String>,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for one book
    Book {
        /// Catalog volume id
        id: String,
    },

    /// Show the landing page shelf
    Home {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = AppServices::build(config).context("failed to initialize services")?;

    match cli.command {
        Commands::Search {
            term,
            genre,
            page,
            json,
        } => {
            let state = SearchState::new(&term.join(" "), genre.as_deref(), page);
            let (session, _location) = services.search_session(&format_search_state(&state, ""));
            session.load().await;
            let view = session.view().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            println!("Query: {}", view.query);
            if let Some(message) = &view.message {
                println!("{}", message);
            }
            for book in &view.items {
                print_summary(book);
            }
            println!(
                "{}  (prev: {}, next: {})",
                view.page_label,
                if view.prev_enabled { "yes" } else { "no" },
                if view.next_enabled { "yes" } else { "no" }
            );
        }
        Commands::Book { id } => match services.catalog_service.book_details(&id).await {
            DetailsOutcome::Found(book) => {
                println!("{}", book.title);
                println!("Authors:   {}", book.authors_display());
                println!("Published: {}", book.published_year());
                println!("Publisher: {}", book.publisher_display());
                println!("Pages:     {}", book.page_count_display());
                println!("Language:  {}", book.language_display());
                println!("Genres:    {}", book.categories_display());
                if let Some(description) = &book.description {
                    println!();
                    println!("{}", description);
                }
            }
            other => println!("{}", other.message().unwrap_or_default()),
        },
        Commands::Home { page } => match services.catalog_service.home_page(page).await {
            Ok(result) => {
                for book in &result.items {
                    print_summary(book);
                }
            }
            Err(e) => println!("{}", e.user_message()),
        },
    }

    Ok(())
}

fn print_summary(book: &BookSummary) {
    println!("  {:<14} {} ({})", book.id, book.title, book.authors_display());
}
