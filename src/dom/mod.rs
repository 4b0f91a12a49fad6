//! HTML front end: html5ever parsing into an arena DOM, plus CSS selectors.
//!
//! # Example
//!
//! ```
//! use navtree::dom::{parse_html, Selector};
//!
//! let dom = parse_html("<main><div class='nav-sections'><h1>Home</h1></div></main>");
//! let sections = Selector::parse(".nav-sections").unwrap();
//! let container = sections.select_first(&dom, dom.document()).unwrap();
//! assert_eq!(dom.text_content(container), "Home");
//! ```

mod arena;
mod selector;
mod tree_sink;

pub use arena::{ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute};
pub use selector::Selector;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

/// Parse an HTML document (or fragment; html5ever supplies the missing
/// `<html>`/`<body>` wrappers) into an arena DOM.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse raw HTML bytes, detecting the encoding from a `<meta charset>` hint
/// when the bytes are not valid UTF-8.
pub fn parse_html_bytes(html: &[u8]) -> ArenaDom {
    let hint = crate::util::extract_meta_charset(html);
    let text = crate::util::decode_text(html, hint);
    parse_html(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_windows_1252() {
        // "Café" in Windows-1252
        let bytes = b"<meta charset=\"windows-1252\"><h1>Caf\xe9</h1>";
        let dom = parse_html_bytes(bytes);
        let h1 = dom.find_by_tag("h1").unwrap();
        assert_eq!(dom.text_content(h1), "Café");
    }

    #[test]
    fn test_parse_bytes_utf8() {
        let dom = parse_html_bytes("<h1>Über uns</h1>".as_bytes());
        let h1 = dom.find_by_tag("h1").unwrap();
        assert_eq!(dom.text_content(h1), "Über uns");
    }
}
