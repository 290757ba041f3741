//! Book server
//!
//! Renders the book layout on the server and serves it together with its
//! generated stylesheet and a static assets directory.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use book_ui::{
    BookLayout, BookStyles, Clock, LayoutConfig, LayoutError, StaticToc, SystemClock, TocProvider,
};
use http::header::{CACHE_CONTROL, CONTENT_TYPE};
use leptos::prelude::*;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir};

/// Errors raised while starting the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Invalid or unreadable layout configuration.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Socket or file system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A logger was already installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Shared, read-only state for request handlers.
pub struct AppState {
    /// Layout configuration.
    pub config: LayoutConfig,
    /// Generated stylesheet served at `/book.css`.
    pub stylesheet: String,
    /// Footer date source.
    pub clock: Arc<dyn Clock>,
    /// Sidebar navigation.
    pub toc: Arc<dyn TocProvider>,
}

impl AppState {
    /// Build state from configuration, using the system clock.
    ///
    /// The configuration is validated first since its scope ends up in CSS
    /// selectors.
    pub fn new(config: LayoutConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let styles: BookStyles = config.styles();
        let toc: Arc<dyn TocProvider> = Arc::new(StaticToc::new(config.toc.clone()));

        Ok(Self {
            stylesheet: styles.stylesheet(),
            clock: Arc::new(SystemClock),
            toc,
            config,
        })
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Initialize logging with the specified verbosity level.
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: u8) -> Result<(), ServerError> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;
    Ok(())
}

/// Render the full HTML document for the landing page.
pub fn render_page(state: &AppState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let config = state.config.clone();
        let toc = Arc::clone(&state.toc);
        let clock = Arc::clone(&state.clock);

        let title = view! { <title>{config.title.clone()}</title> }.to_html();
        let body = view! {
          <BookLayout config=config toc=toc clock=clock>
            <p>"Select a chapter from the table of contents."</p>
          </BookLayout>
        }
        .to_html();

        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
             {title}<link rel=\"stylesheet\" href=\"/book.css\"/></head>\
             <body>{body}</body></html>"
        )
    })
}

/// Create the server router.
pub fn create_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/book.css", get(stylesheet_handler))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    log::debug!("rendering landing page");
    Html(render_page(&state))
}

async fn stylesheet_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, "no-cache"),
        ],
        state.stylesheet.clone(),
    )
}
