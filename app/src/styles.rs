//! Region styling.
//!
//! Every region carries two classes: a stable semantic name that site themes
//! can target (`book-header`) and a scoped style-module name that only this
//! layout's own stylesheet uses (`bookHeader_<scope>`).

use std::fmt::Write as _;

use crate::classes::class_names;

/// Default style scope.
pub const DEFAULT_SCOPE: &str = "bk";

/// One of the fixed structural areas of the book layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Outer wrapper holding every other region.
    Layout,
    /// Title bar.
    Header,
    /// Table of contents plus content.
    Main,
    /// Container around the page payload.
    Content,
    /// Copyright line.
    Footer,
}

impl Region {
    /// All regions in document order.
    pub const ALL: [Region; 5] = [
        Region::Layout,
        Region::Header,
        Region::Main,
        Region::Content,
        Region::Footer,
    ];

    /// Stable class name for site-wide theming.
    pub fn semantic(self) -> &'static str {
        match self {
            Region::Layout => "book-layout",
            Region::Header => "book-header",
            Region::Main => "book-main",
            Region::Content => "book-content",
            Region::Footer => "book-footer",
        }
    }

    /// Style-module key the scoped class is derived from.
    pub fn module_key(self) -> &'static str {
        match self {
            Region::Layout => "bookLayout",
            Region::Header => "bookHeader",
            Region::Main => "bookMain",
            Region::Content => "bookContent",
            Region::Footer => "bookFooter",
        }
    }

    fn rules(self) -> &'static str {
        match self {
            Region::Layout => {
                "display: flex; flex-direction: column; min-height: 100vh; margin: 0 auto;"
            }
            Region::Header => {
                "position: sticky; top: 0; z-index: 10; padding: 0.75rem 1.5rem; \
                 border-bottom: 1px solid #e5e7eb; background: #ffffff;"
            }
            Region::Main => "display: flex; flex: 1; gap: 2rem; padding: 1.5rem;",
            Region::Content => "flex: 1; min-width: 0; max-width: 48rem; line-height: 1.7;",
            Region::Footer => {
                "padding: 1rem 1.5rem; border-top: 1px solid #e5e7eb; \
                 color: #6b7280; font-size: 0.875rem; text-align: center;"
            }
        }
    }
}

/// Resolves region class names for a given style scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStyles {
    scope: String,
}

impl BookStyles {
    /// Create a resolver for `scope`.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    /// The configured scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Scoped class name for `region`, e.g. `bookMain_bk`.
    pub fn scoped(&self, region: Region) -> String {
        format!("{}_{}", region.module_key(), self.scope)
    }

    /// Full `class` attribute value for `region`.
    pub fn class_for(&self, region: Region) -> String {
        let scoped = self.scoped(region);
        class_names([Some(region.semantic()), Some(scoped.as_str())])
    }

    /// Stylesheet with one rule per region, keyed by the scoped class.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for region in Region::ALL {
            let _ = writeln!(css, ".{} {{ {} }}", self.scoped(region), region.rules());
        }

        // TOC sidebar sits inside main and only exists under the semantic name.
        let main = self.scoped(Region::Main);
        let _ = writeln!(
            css,
            ".{main} .book-toc {{ flex: 0 0 16rem; position: sticky; top: 4rem; \
             align-self: flex-start; font-size: 0.9rem; }}"
        );
        let _ = writeln!(css, ".{main} .book-toc .active > a {{ font-weight: 600; }}");
        let _ = writeln!(
            css,
            "@media (max-width: 768px) {{ .{main} {{ flex-direction: column; }} \
             .{main} .book-toc {{ position: static; flex-basis: auto; }} }}"
        );
        css
    }
}

impl Default for BookStyles {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPE)
    }
}
