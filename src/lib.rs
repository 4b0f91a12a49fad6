//! # navtree
//!
//! Turns heading-structured navigation fragments into mega-menu navigation
//! trees.
//!
//! Authors write navigation as a flat run of headings and paragraphs: `h1`
//! for top-level items, `h2`-`h4` for nested items, a plain paragraph for a
//! description and a linked paragraph for an overview link. navtree parses
//! that into a forest of [`NavigationNode`]s, up to four levels deep.
//!
//! ## Features
//!
//! - Heading structure parsing with orphan dropping and paragraph annotation
//! - Nav fragment sectioning into brand, navigation and tools
//! - Parallel icon inlining with a deadline and per-icon fallback
//! - Interaction state for desktop mega-menus and mobile drill-down menus
//!
//! ## Quick Start
//!
//! ```
//! use navtree::{ContentElement, HeadingLevel, parse_heading_structure};
//!
//! let forest = parse_heading_structure(&[
//!     ContentElement::heading(HeadingLevel::L1, "Products"),
//!     ContentElement::paragraph("Everything we make"),
//!     ContentElement::heading(HeadingLevel::L2, "Software"),
//! ]);
//!
//! assert_eq!(forest[0].description.as_deref(), Some("Everything we make"));
//! assert!(forest[0].has_submenu());
//! assert_eq!(forest[0].children[0].text, "Software");
//! ```
//!
//! ## Decorating a Header
//!
//! ```
//! use navtree::{NavConfig, decorate_header};
//!
//! let html = r#"<main>
//!     <div><p><a href="/">Acme</a></p></div>
//!     <div><h1><a href="/products">Products</a></h1></div>
//!     <div><p><a href="/contact">Contact</a></p></div>
//! </main>"#;
//!
//! let header = decorate_header(html, &NavConfig::default()).unwrap();
//! assert_eq!(header.navigation[0].href, "/products");
//! assert_eq!(header.tools.links[0].text, "Contact");
//! ```

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod header;
pub mod icons;
pub mod menu;
pub mod model;
pub mod parser;
pub(crate) mod util;

pub use config::{IconConfig, NavConfig};
pub use content::{ContentElement, ExtractOptions, HeadingLevel, collect_elements};
pub use dom::{parse_html, parse_html_bytes};
pub use error::{Error, Result};
pub use header::{Header, NavFragment, decorate_header};
pub use icons::{DirIconSource, EnrichReport, IconSource, enrich_icons};
pub use model::{Icon, NavigationNode, OverviewLink};
pub use parser::{parse_container, parse_heading_structure};
