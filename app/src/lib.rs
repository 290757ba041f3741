//! Book UI
//!
//! Leptos components for a book-style documentation reader.
//!
//! # Components
//!
//! - [`BookLayout`] - Header, table of contents, content and footer shell
//! - [`TableOfContents`] - Anchor list rendered by [`StaticToc`]
//! - [`App`] - Client-side root that mounts the layout
//!
//! # Collaborators
//!
//! - [`TocProvider`] - Anything the layout can render as its sidebar
//! - [`Clock`] - Date source for the footer year
//! - [`BookStyles`] - Semantic and scoped class names per [`Region`]
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use book_ui::{BookLayout, FixedClock, LayoutConfig, StaticToc, TocEntry};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Chapter() -> impl IntoView {
//!     let toc = StaticToc::new(vec![TocEntry::new(1, "Introduction", "introduction")]);
//!
//!     view! {
//!       <BookLayout toc=Arc::new(toc)>
//!         <p>"Chapter 1 content"</p>
//!       </BookLayout>
//!     }
//! }
//! ```

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

pub mod classes;
pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod styles;
pub mod toc;

pub use classes::class_names;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{LayoutConfig, StyleConfig};
pub use error::{LayoutError, Result};
pub use layout::{BookLayout, copyright_line};
pub use styles::{BookStyles, Region};
pub use toc::{StaticToc, TableOfContents, TocEntry, TocProvider};

/// Client-side root: the layout with default configuration.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = LayoutConfig::default();
    let title = config.title.clone();

    view! {
      <Title text=title />

      <BookLayout config=config>
        <p>"Select a chapter from the table of contents."</p>
      </BookLayout>
    }
}
