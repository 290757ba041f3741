//! Book server binary.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use book_server::{AppState, ServerError, create_router, init_logging};
use book_ui::LayoutConfig;
use clap::Parser;

/// Command-line interface for the book server.
#[derive(Parser)]
#[command(
    name = "book-server",
    version,
    about = "Serve the book reader layout"
)]
struct Cli {
    /// Path to a TOML layout configuration (defaults apply when omitted;
    /// BOOK__* environment variables override either)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Directory of static assets served for unmatched paths
    #[arg(long, default_value = "public")]
    assets: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => {
            log::info!("loading layout config from {}", path.display());
            LayoutConfig::load_with_env(path)?
        }
        None => LayoutConfig::from_env()?,
    };

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state, &cli.assets);

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    log::info!("serving book layout on http://{}", cli.addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["book-server"]);

        assert!(cli.config.is_none());
        assert_eq!(cli.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.assets, PathBuf::from("public"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "book-server",
            "--config",
            "book.toml",
            "--addr",
            "0.0.0.0:8080",
            "--assets",
            "static",
            "-vv",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("book.toml")));
        assert_eq!(cli.addr.port(), 8080);
        assert_eq!(cli.assets, PathBuf::from("static"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_bad_addr() {
        assert!(Cli::try_parse_from(["book-server", "--addr", "nowhere"]).is_err());
    }
}
