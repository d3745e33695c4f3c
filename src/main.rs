use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use pawfect::api::create_router;
use pawfect::catalog::ListingCatalog;
use pawfect::client::HttpSearchBackend;
use pawfect::config::CONFIG;
use pawfect::date_range::DateRangePicker;
use pawfect::form::Dropdown;
use pawfect::render::render_page;
use pawfect::session::SearchPage;

/// Pawfect pet-services search.
#[derive(Parser)]
#[command(name = "pawfect", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the search API and landing page
    Serve {
        /// Address to listen on (default: PAWFECT_BIND_ADDR)
        #[arg(long)]
        bind: Option<String>,

        /// Directory served at `/` (default: PAWFECT_STATIC_DIR)
        #[arg(long)]
        static_dir: Option<String>,
    },
    /// Search a running server and print the results
    Search {
        /// Server base URL (default: PAWFECT_API_URL)
        #[arg(long)]
        url: Option<String>,

        /// Pet type, by name or by its number in `pawfect options`
        #[arg(long)]
        pet_type: Option<String>,

        /// Location, by name or by number
        #[arg(long)]
        location: Option<String>,

        /// Service, by name or by number
        #[arg(long)]
        service: Option<String>,

        /// First day, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// Last day, YYYY-MM-DD
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// List the selectable pet types, locations and services
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { bind, static_dir } => {
            let bind = bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let static_dir = static_dir.unwrap_or_else(|| CONFIG.static_dir.clone());
            serve(&bind, &static_dir).await?;
        }
        Commands::Search {
            url,
            pet_type,
            location,
            service,
            from,
            to,
        } => {
            let mut page = SearchPage::new();
            for (dropdown, value) in [
                (Dropdown::PetType, pet_type),
                (Dropdown::Location, location),
                (Dropdown::Service, service),
            ] {
                if let Some(value) = value {
                    page.form.choose(dropdown, &value)?;
                }
            }
            if let Some(from) = from {
                let text = DateRangePicker::from_today().pick_str(&from, to.as_deref())?;
                page.form.set_date_range(text);
            }

            let url = url.unwrap_or_else(|| CONFIG.api_url.clone());
            let backend = HttpSearchBackend::new(&url);
            page.submit(&backend).await;

            if let Some(notice) = page.take_notice() {
                eprintln!("{notice}");
            }
            print!("{}", render_page(&page));
        }
        Commands::Options => {
            for dropdown in Dropdown::ALL {
                println!("{}:", dropdown.title());
                for (idx, option) in dropdown.options().iter().enumerate() {
                    println!("  {idx}. {option}");
                }
            }
        }
    }
    Ok(())
}

async fn serve(bind: &str, static_dir: &str) -> anyhow::Result<()> {
    let catalog = Arc::new(ListingCatalog::seeded());
    let app = create_router(catalog, static_dir);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
