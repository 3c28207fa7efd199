mod catalog;
mod link;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(name = "dobra-cli")]
#[command(about = "Dobra catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a WhatsApp contact link without contacting the CMS
    Link {
        /// Destination phone in any format; only digits are kept
        #[arg(long)]
        phone: String,
        /// Base message, e.g. the site default or a product override
        #[arg(long)]
        message: String,
        /// Product title; adds the `Produto:` line
        #[arg(long)]
        title: Option<String>,
        /// Product slug; adds the canonical product link
        #[arg(long, requires = "title")]
        slug: Option<String>,
        /// Starting price in BRL, e.g. 1234.5
        #[arg(long, requires = "slug")]
        price: Option<Decimal>,
    },
    /// List the catalog with availability and contact links
    Catalog {
        /// Only products in this category slug
        #[arg(long)]
        category: Option<String>,
    },
    /// List every product slug
    Slugs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("dobra-cli: run with --help to see available commands");
        return Ok(());
    };

    let config = dobra_core::load_app_config()?;
    let site = dobra_core::SiteUrl::new(&config.site_url);

    match command {
        Commands::Link {
            phone,
            message,
            title,
            slug,
            price,
        } => {
            let request = link::LinkRequest {
                phone: &phone,
                message: &message,
                title: title.as_deref(),
                slug: slug.as_deref(),
                price,
            };
            println!("{}", link::build_link(&site, &request)?);
        }
        Commands::Catalog { category } => {
            let client = dobra_sanity::SanityClient::new(&config)?;
            catalog::run_catalog(&client, &site, category.as_deref()).await?;
        }
        Commands::Slugs => {
            let client = dobra_sanity::SanityClient::new(&config)?;
            catalog::run_slugs(&client).await?;
        }
    }

    Ok(())
}
