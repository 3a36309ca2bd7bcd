use anyhow::Result;
use clap::{Parser, Subcommand};
use shopview::facade::{CatalogFacade, HOME_SAMPLE};
use shopview::logging::init_tracing;
use shopview::render::{RenderSink, TerminalSink};
use shopview::sources::ShopApiClient;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "sv", version, about = "Shopview catalog browser CLI")]
struct Cli {
    /// Override the catalog backend base URL (default: SHOP_API_BASE_URL, or http://localhost:5000)
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Load the catalog and print a random landing grid
    Home {
        /// Number of products to sample
        #[arg(long, default_value_t = HOME_SAMPLE)]
        count: usize,
    },
    /// Load the catalog and print the two-level category menu
    Menu,
    /// Preview a top-level category (up to 3 products per subcategory)
    Category {
        /// Top-level category name
        name: String,
    },
    /// List every product of one subcategory
    Subcategory {
        /// Top-level category name
        top: String,
        /// Subcategory name
        name: String,
    },
    /// Filter the catalog by product name
    Search {
        /// Case-insensitive name fragment
        query: String,
    },
    /// Show one product with its recommendation rows
    Detail {
        /// Product id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("shopview=info,sv=info")?;
    let cli = Cli::parse();

    let client = ShopApiClient::new(cli.base_url.as_deref(), None)?;
    let mut facade = CatalogFacade::new(client.clone(), client);
    let mut sink = TerminalSink::default();

    // Detail only needs point lookups; every other command browses the tree.
    if !matches!(cli.command, Commands::Detail { .. }) {
        if let Err(err) = facade.load_catalog().await {
            error!(%err, "catalog load failed");
            sink.load_failure();
            return Ok(());
        }
    }

    match cli.command {
        Commands::Home { count } => sink.grid(&facade.home_sample(count)),
        Commands::Menu => sink.menu(facade.tree()),
        Commands::Category { name } => {
            let groups = facade.browse(&name);
            sink.category_preview(&name, &groups);
        }
        Commands::Subcategory { top, name } => {
            let products = facade.browse_subcategory(&top, &name).unwrap_or_default();
            sink.grid(products);
        }
        Commands::Search { query } => sink.grid(&facade.search(&query)),
        Commands::Detail { id } => match facade.view_detail(&id).await {
            Ok(view) => sink.detail(&view),
            Err(err) => {
                error!(%err, id = %id, "detail view failed");
                println!("Product {id} is unavailable.");
            }
        },
    }

    Ok(())
}
