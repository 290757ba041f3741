//! Table of contents.
//!
//! The layout only knows the [`TocProvider`] contract: something it can ask
//! to render, with no inputs, right before the page content. [`StaticToc`]
//! is the default provider and renders a fixed list of anchors.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classes::class_names;

/// A renderable sidebar navigation unit.
pub trait TocProvider: Send + Sync + 'static {
    /// Render the navigation.
    fn render(&self) -> AnyView;
}

impl<F, V> TocProvider for F
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    fn render(&self) -> AnyView {
        self().into_any()
    }
}

/// Table of contents entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,

    /// Heading text.
    pub text: String,

    /// Anchor ID.
    pub id: String,
}

impl TocEntry {
    /// Create a new TOC entry. `level` is clamped to 1-6.
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: text.into(),
            id: id.into(),
        }
    }
}

/// A fixed list of entries, optionally with one marked active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticToc {
    entries: Vec<TocEntry>,
    active_id: Option<String>,
}

impl StaticToc {
    /// Create a provider for `entries`.
    pub fn new(entries: Vec<TocEntry>) -> Self {
        Self {
            entries,
            active_id: None,
        }
    }

    /// Mark the entry with `id` as the current section.
    pub fn with_active(mut self, id: impl Into<String>) -> Self {
        self.active_id = Some(id.into());
        self
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }
}

impl TocProvider for StaticToc {
    fn render(&self) -> AnyView {
        let entries = self.entries.clone();
        let active_id = self.active_id.clone();
        view! { <TableOfContents entries=entries active_id=active_id /> }.into_any()
    }
}

/// Table of contents component.
///
/// Always renders the `<nav>` wrapper, even with no entries.
#[component]
pub fn TableOfContents(
    /// TOC entries.
    entries: Vec<TocEntry>,
    /// Currently active heading ID.
    #[prop(optional_no_strip)]
    active_id: Option<String>,
) -> impl IntoView {
    let items = entries
        .into_iter()
        .map(|entry| {
            let level_class = format!("book-toc-level-{}", entry.level);
            let is_active = active_id.as_deref() == Some(entry.id.as_str());
            let class = class_names([Some(level_class.as_str()), is_active.then_some("active")]);
            let href = format!("#{}", entry.id);

            view! {
              <li class=class>
                <a href=href class="book-toc-link">
                  {entry.text}
                </a>
              </li>
            }
        })
        .collect_view();

    view! {
      <nav aria-label="Table of contents" class="book-toc">
        <h2 class="book-toc-title">"Contents"</h2>
        <ul class="book-toc-list">{items}</ul>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<TocEntry> {
        vec![
            TocEntry::new(1, "Introduction", "introduction"),
            TocEntry::new(2, "Sensors", "sensors"),
        ]
    }

    #[test]
    fn test_toc_entry_creation() {
        let entry = TocEntry::new(2, "Introduction", "introduction");
        assert_eq!(entry.level, 2);
        assert_eq!(entry.text, "Introduction");
        assert_eq!(entry.id, "introduction");
    }

    #[test]
    fn test_toc_entry_level_clamped() {
        assert_eq!(TocEntry::new(0, "a", "a").level, 1);
        assert_eq!(TocEntry::new(9, "b", "b").level, 6);
    }

    #[test]
    fn test_toc_entry_deserialization() {
        let entry: TocEntry =
            toml::from_str("level = 3\ntext = \"Actuators\"\nid = \"actuators\"").unwrap();
        assert_eq!(entry, TocEntry::new(3, "Actuators", "actuators"));
    }

    #[test]
    fn test_static_toc_renders_entries_in_order() {
        let html = StaticToc::new(sample_entries()).render().to_html();

        assert!(html.starts_with("<nav aria-label=\"Table of contents\" class=\"book-toc\">"));
        let intro = html.find("href=\"#introduction\"").expect("intro link");
        let sensors = html.find("href=\"#sensors\"").expect("sensors link");
        assert!(intro < sensors);
        assert!(html.contains("book-toc-level-1"));
        assert!(html.contains("book-toc-level-2"));
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_static_toc_marks_active_entry() {
        let html = StaticToc::new(sample_entries())
            .with_active("sensors")
            .render()
            .to_html();

        assert!(html.contains("class=\"book-toc-level-2 active\""));
        assert!(html.contains("class=\"book-toc-level-1\""));
    }

    #[test]
    fn test_empty_toc_still_renders_nav() {
        let toc = StaticToc::default();
        assert!(toc.entries().is_empty());

        let html = toc.render().to_html();
        assert!(html.starts_with("<nav "));
        assert!(html.contains("class=\"book-toc\""));
        assert!(html.contains("<ul class=\"book-toc-list\">"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || view! { <aside class="custom-toc">"Chapters"</aside> };
        let html = TocProvider::render(&provider).to_html();
        assert!(html.contains("<aside class=\"custom-toc\">Chapters</aside>"));
    }
}
