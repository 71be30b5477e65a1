mod redirect;
mod security;
mod utils;

use app::{component, shell};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Json,
    routing::get,
};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::{RateLimiter, security_headers, validate_production_env};
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utils::{robots_handler, sitemap_handler};

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "skylark-site",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(errors) = validate_production_env() {
        for error in &errors {
            logging::error!("{}", error);
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);
    let rate_limiter = RateLimiter::new(240, 60);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
        .nest_service("/static", ServeDir::new("target/site"))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn(security_headers))
                .layer(axum::middleware::from_fn(
                    move |req: Request<Body>, next: Next| {
                        let limiter = rate_limiter.clone();
                        async move { limiter.middleware(req, next).await }
                    },
                )),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(_) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_debug() {
        // Test debug assertions return debug level
        let level = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        if cfg!(debug_assertions) {
            assert_eq!(level, tracing::Level::DEBUG);
        } else {
            assert_eq!(level, tracing::Level::INFO);
        }
    }

    #[test]
    fn test_env_loading() {
        // dotenv may or may not find a file; either outcome is acceptable.
        let result = dotenvy::dotenv();
        assert!(result.is_ok() || result.is_err());
    }

    #[tokio::test]
    async fn test_configuration_loading() {
        // Configuration loading should return a result type
        let config_result = get_configuration(Some("Cargo.toml"));
        assert!(config_result.is_ok() || config_result.is_err());
    }

    #[test]
    fn test_health_handler_structure() {
        // Test that health handler exists with correct signature
        let _: fn() -> _ = health_handler;

        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let json_value = result.unwrap().0;
            assert_eq!(json_value.get("service").unwrap(), "skylark-site");
            assert!(json_value.get("status").is_some());
            assert!(json_value.get("timestamp").is_some());
            assert!(json_value.get("version").is_some());
        });
    }
}
