#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use fluxo_landing::app::*;
    use fluxo_landing::core::config::Config;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::{ServeDir, ServeFile};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing (filter via RUST_LOG)
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();
    tracing::info!("Config loaded: app_dist={}", config.has_app_dist());

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Invalid Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // The landing page redirects to the relative path "index.html", which
    // resolves to /index.html from the page root
    let mut app = Router::new();
    match config.app_entry_file() {
        Ok(Some(entry)) => {
            tracing::info!("Serving app entry from {}", entry.display());
            app = app.route_service("/index.html", ServeFile::new(entry));
        }
        Ok(None) => {
            tracing::info!("APP_DIST_DIR not set, /index.html must be served by the app host");
        }
        Err(e) => {
            tracing::warn!("{}", e);
        }
    }

    let app = app
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
