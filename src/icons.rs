//! Icon enrichment: swapping icon image references for inline SVG.
//!
//! Every distinct icon source in a forest is loaded on its own thread. Loads
//! fail independently and share one deadline: anything that errors, yields no
//! `<svg>`, or misses the deadline leaves its icons untouched.

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use memchr::memmem;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::dom::parse_html;
use crate::error::{Error, Result};
use crate::model::{Icon, NavigationNode};

/// Something that can load the raw text behind an icon source URL.
pub trait IconSource: Send + Sync {
    fn load(&self, src: &str) -> Result<String>;
}

impl<F> IconSource for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn load(&self, src: &str) -> Result<String> {
        self(src)
    }
}

/// Loads icons from a local directory, mapping the URL path onto it
/// (`/icons/search.svg` -> `<root>/icons/search.svg`).
#[derive(Debug, Clone)]
pub struct DirIconSource {
    root: PathBuf,
}

impl DirIconSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path for an icon source, refusing anything outside the root.
    ///
    /// Path segments are percent-decoded before they are checked, so
    /// `my%20icon.svg` finds `my icon.svg` and `%2e%2e` is refused like `..`.
    pub fn resolve(&self, src: &str) -> Result<PathBuf> {
        let url_path = match Url::parse(src) {
            Ok(url) => url.path().to_string(),
            Err(_) => src.split(['?', '#']).next().unwrap_or_default().to_string(),
        };

        let invalid = || Error::InvalidIconPath(src.to_string());
        let mut path = self.root.clone();
        for segment in url_path.split('/').filter(|s| !s.is_empty()) {
            let decoded = percent_decode_str(segment)
                .decode_utf8()
                .map_err(|_| invalid())?;
            match decoded.as_ref() {
                "." => {}
                ".." => return Err(invalid()),
                part if part.contains(['/', '\\', '\0']) => return Err(invalid()),
                part => path.push(part),
            }
        }
        Ok(path)
    }
}

impl IconSource for DirIconSource {
    fn load(&self, src: &str) -> Result<String> {
        let path = self.resolve(src)?;
        std::fs::read_to_string(&path).map_err(|source| Error::IconLoad {
            src: src.to_string(),
            source,
        })
    }
}

/// Outcome counts of one enrichment pass, per distinct source.
///
/// A source whose loader panics counts as failed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichReport {
    pub resolved: usize,
    pub failed: usize,
    pub timed_out: usize,
}

/// Pull the `<svg>...</svg>` markup out of a loaded document.
///
/// The text is parsed first so that a document with no real `<svg>` element
/// is rejected. The slice starts at the first `<svg` tag outside a comment.
pub fn extract_svg(text: &str) -> Option<String> {
    let dom = parse_html(text);
    dom.find_by_tag("svg")?;

    let bytes = text.as_bytes();
    let start = find_svg_start(bytes)?;
    let end = memmem::rfind(&bytes[start..], b"</svg>")
        .map(|pos| start + pos + "</svg>".len())
        .unwrap_or(text.len());

    Some(text[start..end].trim_end().to_string())
}

/// Offset of the first `<svg` start tag that is not inside `<!-- ... -->`.
fn find_svg_start(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;
    loop {
        let rest = &bytes[pos..];
        let svg = memmem::find(rest, b"<svg")?;
        match memmem::find(rest, b"<!--") {
            Some(comment) if comment < svg => {
                let body = pos + comment + "<!--".len();
                let close = memmem::find(&bytes[body..], b"-->")?;
                pos = body + close + "-->".len();
            }
            _ => {
                let at = pos + svg;
                let after = bytes.get(at + "<svg".len()).copied();
                if matches!(after, Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')) {
                    return Some(at);
                }
                pos = at + "<svg".len();
            }
        }
    }
}

/// Resolve every icon in `forest` to inline SVG, in parallel, within `timeout`.
///
/// Never fails; see [`EnrichReport`] for what happened.
pub fn enrich_icons(
    forest: &mut [NavigationNode],
    source: Arc<dyn IconSource>,
    timeout: Duration,
) -> EnrichReport {
    let mut sources = Vec::new();
    collect_sources(forest, &mut sources);
    sources.sort();
    sources.dedup();

    let mut report = EnrichReport::default();
    if sources.is_empty() {
        return report;
    }

    let (tx, rx) = mpsc::channel();
    for src in &sources {
        let tx = tx.clone();
        let source = Arc::clone(&source);
        let src = src.clone();
        // Detached: a load that outlives the deadline just has its result dropped.
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.load(&src)));
            let _ = tx.send((src, result));
        });
    }
    drop(tx);

    let deadline = Instant::now() + timeout;
    let mut resolved: HashMap<String, String> = HashMap::new();
    let mut pending = sources.len();

    while pending > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Ok((src, result)) = rx.recv_timeout(remaining) else {
            break;
        };
        pending -= 1;

        match result {
            Ok(Ok(text)) => match extract_svg(&text) {
                Some(svg) => {
                    resolved.insert(src, svg);
                    report.resolved += 1;
                }
                None => {
                    log::warn!("icon {src} has no <svg> element, keeping image reference");
                    report.failed += 1;
                }
            },
            Ok(Err(err)) => {
                log::warn!("failed to load icon {src}: {err}");
                report.failed += 1;
            }
            Err(_) => {
                log::warn!("icon loader panicked on {src}, keeping image reference");
                report.failed += 1;
            }
        }
    }

    if pending > 0 {
        log::warn!(
            "{pending} icon(s) not loaded within {}ms, keeping image references",
            timeout.as_millis()
        );
        report.timed_out = pending;
    }

    apply_svgs(forest, &resolved);
    log::info!(
        "icon enrichment: {} resolved, {} failed, {} timed out",
        report.resolved,
        report.failed,
        report.timed_out
    );
    report
}

fn collect_sources(nodes: &[NavigationNode], out: &mut Vec<String>) {
    for node in nodes {
        if let Some(src) = node.icon.as_ref().and_then(|icon| icon.src.as_ref()) {
            out.push(src.clone());
        }
        collect_sources(&node.children, out);
    }
}

fn apply_svgs(nodes: &mut [NavigationNode], resolved: &HashMap<String, String>) {
    for node in nodes {
        if let Some(Icon {
            src: Some(src),
            svg,
            ..
        }) = &mut node.icon
            && let Some(markup) = resolved.get(src.as_str())
        {
            *svg = Some(markup.clone());
        }
        apply_svgs(&mut node.children, resolved);
    }
}
