use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pawsome_viewer::catalog::{BreedFilter, Catalog};
use pawsome_viewer::client::ApiClient;
use pawsome_viewer::render::render_catalog;

const DEFAULT_API_URL: &str = "http://localhost:2022";

/// Usage: `pawsome-viewer [BREED]`
///
/// `BREED` is an exact breed name, or `all` (the default) for every dog.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawsome_viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let api_url = std::env::var("VIEWER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    let filter = std::env::args()
        .nth(1)
        .map(|raw| BreedFilter::parse(&raw))
        .unwrap_or_default();
    tracing::info!(%api_url, ?filter, "Loading catalog");

    // --- Load and render ---
    let client = ApiClient::new(api_url);
    let mut catalog = Catalog::load(&client).await;
    catalog.select_breed(filter);

    print!("{}", render_catalog(&catalog));
}
