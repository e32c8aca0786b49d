pub mod api;
pub mod catalog;
pub mod config;
pub mod middleware;
pub mod query;
pub mod server;
pub mod user;
pub mod util;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Seed error: {0}")]
    Seed(#[from] catalog::SeedError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Wire the catalog, engine and user store together from `config`.
pub fn build_api(config: &config::Config) -> Result<api::VibeApi, ServerError> {
    let records = match config.seed {
        Some(ref path) => {
            info!("Loading seed file {}", path);
            catalog::load_seed(path)?
        }
        None => catalog::default_seed(),
    };
    info!("Catalog holds {} recommendations", records.len());

    let source = Arc::new(catalog::InMemorySource::new(records));
    let distance = Arc::new(query::ThrottlePolicy::from(&config.distance));
    let engine = query::QueryEngine::new(source, config.categories.clone(), distance);

    let user = config.user.clone().unwrap_or_default();
    let users = Arc::new(user::InMemoryUserStore::new(Some(user)));

    Ok(api::VibeApi::new(engine, users, config.latency.clone()))
}

pub async fn run(config_path: &str, debug_logs: bool) -> Result<(), ServerError> {
    let mut config = match config::Config::from_file(config_path) {
        Ok(config) => config,
        Err(config::ConfigError::ReadError(_, e))
            if e.kind() == std::io::ErrorKind::NotFound && config_path == DEFAULT_CONFIG =>
        {
            info!("No {} found, using built-in defaults", DEFAULT_CONFIG);
            config::Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.debug_logs = debug_logs;

    info!("Using config file: {}", config_path);
    if debug_logs {
        info!("Debug logging enabled");
    }

    let api = build_api(&config)?;

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(config, api);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = tls {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}

pub const DEFAULT_CONFIG: &str = "vibemap.yaml";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterSpec, PageRequest};

    #[tokio::test]
    async fn test_build_api_from_config() {
        let yaml = r#"
categories:
  Art: [Artsy]
distance:
  threshold: 2
  max_results: 1
latency:
  query: 0
  get: 0
user:
  userId: alice
  preferences:
    vibes: [Artsy]
"#;
        let config = config::Config::from_yaml(yaml).unwrap();
        let api = build_api(&config).unwrap();

        let page = api
            .get_recommendations(&FilterSpec::default().with_category("Art"), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.items[0].id, "3");
        assert_eq!(page.total, 1);

        // Distance 3 is above this threshold, so nothing is cut.
        let page = api
            .get_recommendations(&FilterSpec::default().with_max_distance(3.0), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 6);

        let page = api
            .get_recommendations(&FilterSpec::default().with_max_distance(1.0), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_build_api_bad_seed() {
        let config = config::Config {
            seed: Some("/nonexistent/seed.yaml".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_api(&config), Err(ServerError::Seed(_))));
    }
}
