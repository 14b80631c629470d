use anyhow::{bail, Context, Result};
use catalog_client::{config::load_settings, config::normalize_base_url, CatalogClient};
use clap::Parser;
use grid_core::{GridController, LoadDisposition, EMPTY_MESSAGE};
use shared::domain::{PageNumber, Row, RowField};
use tracing_subscriber::EnvFilter;

/// Fetch one page of the artwork catalog and print it.
#[derive(Parser, Debug)]
struct Args {
    /// 1-indexed catalog page
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Overrides the configured catalog base url
    #[arg(long)]
    base_url: Option<String>,
    /// Print rows as JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings().context("failed to load settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(page) = PageNumber::new(args.page) else {
        bail!("--page must be 1 or greater");
    };
    let base_url = match args.base_url {
        Some(url) => normalize_base_url(&url)?,
        None => settings.catalog_base_url,
    };

    tracing::debug!(%base_url, page = page.get(), "fetching catalog page");
    let client = CatalogClient::new(base_url);
    let mut grid = GridController::starting_at(page);
    let ticket = grid.mount();
    if grid.load_with(ticket, &client).await == LoadDisposition::Failed {
        bail!("could not load page {page} from {}", client.base_url());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(grid.rows())?);
    } else {
        print_table(page, grid.rows());
    }

    Ok(())
}

fn print_table(page: PageNumber, rows: &[Row]) {
    println!("Page {page}");
    if rows.is_empty() {
        println!("{EMPTY_MESSAGE}");
        return;
    }

    for row in rows {
        let id = row.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
        println!("#{id}");
        for field in RowField::ALL {
            println!("  {:<16} {}", field.header(), field.display(row));
        }
    }
}
