//! The book layout shell.

use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    clock::{Clock, SystemClock},
    config::LayoutConfig,
    styles::Region,
    toc::{StaticToc, TocProvider},
};

/// Footer copyright text, e.g. `© 2025 My AI Textbook`.
pub fn copyright_line(year: i32, holder: &str) -> String {
    match holder.trim() {
        "" => format!("© {year}"),
        holder => format!("© {year} {holder}"),
    }
}

/// Book-style reader layout: header, table of contents, content and footer.
///
/// Renders, in order, a header with the configured title, a main region
/// holding the table of contents followed by `children` inside the content
/// container, and a footer with the copyright line for the clock's current
/// year. Missing children render an empty content container.
#[component]
pub fn BookLayout(
    /// Title, footer holder, style scope and default TOC entries.
    #[prop(optional)]
    config: LayoutConfig,
    /// Sidebar navigation. Defaults to a [`StaticToc`] built from `config.toc`.
    #[prop(optional)]
    toc: Option<Arc<dyn TocProvider>>,
    /// Date source for the footer year. Defaults to [`SystemClock`].
    #[prop(optional)]
    clock: Option<Arc<dyn Clock>>,
    /// Page content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let year = match clock {
        Some(clock) => clock.year(),
        None => SystemClock.year(),
    };
    log::trace!("rendering book layout for {year}");

    let toc_view = match toc {
        Some(toc) => toc.render(),
        None => StaticToc::new(config.toc.clone()).render(),
    };

    let styles = config.styles();
    let copyright = copyright_line(year, &config.copyright_holder);

    view! {
      <div class=styles.class_for(Region::Layout)>
        <header class=styles.class_for(Region::Header)>
          <h1>{config.title}</h1>
        </header>
        <main class=styles.class_for(Region::Main)>
          {toc_view}
          <div class=styles.class_for(Region::Content)>{children.map(|children| children())}</div>
        </main>
        <footer class=styles.class_for(Region::Footer)>
          <p>{copyright}</p>
        </footer>
      </div>
    }
}
