//! urlshort
//!
//! Serves redirects for a fixed table of paths and answers everything else
//! with `404 Not Found`.
//!
//! ```text
//!   Client ──▶ TCP listener ──▶ Axum (TraceLayer)
//!                                   │
//!                                   ▼
//!                             PathResolver ──hit──▶ 302 Found, Location
//!                                   │
//!                                  miss
//!                                   ▼
//!                               not_found ──▶ 404
//! ```

use std::path::PathBuf;

use axum::handler::HandlerWithoutStateExt;
use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{load_mapping, ListenerConfig};
use urlshort::http::{not_found, shutdown_signal, RedirectServer};
use urlshort::observability::logging;
use urlshort::routing::{Mapping, PathResolver};

#[derive(Parser)]
#[command(name = "urlshort")]
#[command(about = "Redirect configured paths, 404 everything else", long_about = None)]
struct Cli {
    /// YAML redirect table; the built-in table is served when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(short, long, default_value_t = ListenerConfig::default().bind_address)]
    bind: String,
}

fn builtin_mapping() -> Mapping {
    Mapping::from_entries([
        ("/urlshort-godoc", "https://godoc.org/github.com/gophercises/urlshort"),
        ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let listener_config = ListenerConfig {
        bind_address: cli.bind,
    };

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    let mapping = match &cli.config {
        Some(path) => {
            let mapping = load_mapping(path)?;
            tracing::info!(path = %path.display(), entries = mapping.len(), "Redirect table loaded");
            mapping
        }
        None => {
            tracing::info!("No redirect table given, serving built-in entries");
            builtin_mapping()
        }
    };

    let resolver = PathResolver::new(mapping, not_found.into_service());
    let server = RedirectServer::new(resolver);

    let listener = TcpListener::bind(&listener_config.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping_entries() {
        let mapping = builtin_mapping();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("/urlshort-godoc"),
            Some("https://godoc.org/github.com/gophercises/urlshort")
        );
        assert_eq!(mapping.get("/yaml-godoc"), Some("https://godoc.org/gopkg.in/yaml.v2"));
    }
}
