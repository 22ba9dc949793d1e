use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use menu_core::{DuplicatePolicy, MenuDiscovery, MenuTreeBuilder};
use menu_infrastructure::{CompositeDiscovery, ManifestDiscovery, MenuRegistry};
use menu_shared::AppConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use menu_api::{build_router, AppState};

mod pages;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry(&config.telemetry);

    info!("{} starting ({})...", config.app.name, config.app.env);

    let policy = config
        .menu
        .duplicate_policy
        .parse::<DuplicatePolicy>()
        .inspect_err(|e| error!("Invalid menu.duplicate_policy: {}", e))?;

    // Page registry (compiled-in pages), then the optional manifest
    let registry = pages::register_pages(MenuRegistry::builder()).freeze();
    let mut discovery = CompositeDiscovery::new().with_source(registry);
    if let Some(path) = &config.menu.manifest_path {
        let manifest = ManifestDiscovery::load(path, config.menu.manifest_required)
            .inspect_err(|e| error!("Failed to load menu manifest: {}", e))?;
        discovery = discovery.with_source(Arc::new(manifest));
    }
    let discovery: Arc<dyn MenuDiscovery> = Arc::new(discovery);

    let menu = MenuTreeBuilder::with_policy(discovery, policy);
    let report = menu.diagnose()?;
    info!(
        "Menu discovery: {} declarations, {} roots, {} dangling, {} cyclic, {} duplicates",
        report.declarations,
        report.roots.len(),
        report.dangling.len(),
        report.cyclic.len(),
        report.duplicates.len()
    );

    let state = AppState::new(menu, config.app.name.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin("http://localhost:5173".parse::<HeaderValue>()?)
                .allow_methods([Method::GET, Method::OPTIONS]),
        );

    // Bind address
    let addr = SocketAddr::from(config.bind_addr()?);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
