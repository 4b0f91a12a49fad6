//! CSS selector matching against the arena DOM.
//!
//! Used to locate the navigation container inside a fragment
//! (e.g. `.nav-sections`, `main > div:nth-child(2)`).

use std::fmt;

use cssparser::{Parser, ParserInput};
use html5ever::{LocalName, Namespace};
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::context::{MatchingContext, SelectorCaches};
use selectors::matching::ElementSelectorFlags;
use selectors::parser::{ParseRelative, SelectorList, SelectorParseErrorKind};
use selectors::{OpaqueElement, SelectorImpl};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};
use crate::error::{Error, Result};

/// A compiled, comma-separated selector list.
#[derive(Clone)]
pub struct Selector {
    source: String,
    selectors: Vec<selectors::parser::Selector<NavSelectors>>,
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Selector").field(&self.source).finish()
    }
}

impl Selector {
    /// Compile a selector list.
    pub fn parse(source: &str) -> Result<Self> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let list = SelectorList::parse(&NavSelectors, &mut parser, ParseRelative::No).map_err(
            |e| Error::InvalidSelector {
                selector: source.to_string(),
                message: format!("{:?}", e.kind),
            },
        )?;

        Ok(Self {
            source: source.to_string(),
            selectors: list.slice().to_vec(),
        })
    }

    /// The text this selector was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Does the element `id` match any selector in the list?
    pub fn matches(&self, dom: &ArenaDom, id: ArenaNodeId) -> bool {
        if !dom.is_element(id) {
            return false;
        }

        let elem = ElementRef::new(dom, id);
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            selectors::matching::MatchingMode::Normal,
            None,
            &mut caches,
            selectors::context::QuirksMode::NoQuirks,
            selectors::matching::NeedsSelectorFlags::No,
            selectors::matching::MatchingForInvalidation::No,
        );

        self.selectors.iter().any(|selector| {
            selectors::matching::matches_selector(selector, 0, None, &elem, &mut context)
        })
    }

    /// First matching descendant of `root`, in document order.
    pub fn select_first(&self, dom: &ArenaDom, root: ArenaNodeId) -> Option<ArenaNodeId> {
        dom.descendants(root).find(|&id| self.matches(dom, id))
    }

    /// Every matching descendant of `root`, in document order.
    pub fn select_all(&self, dom: &ArenaDom, root: ArenaNodeId) -> Vec<ArenaNodeId> {
        dom.descendants(root)
            .filter(|&id| self.matches(dom, id))
            .collect()
    }
}

// ============================================================================
// selectors crate plumbing
// ============================================================================

/// Selector implementation marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelectors;

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct IdentStr(pub String);

impl precomputed_hash::PrecomputedHash for IdentStr {
    fn precomputed_hash(&self) -> u32 {
        self.0
            .bytes()
            .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
    }
}

impl AsRef<str> for IdentStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IdentStr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl cssparser::ToCss for IdentStr {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(&self.0)
    }
}

/// LocalName wrapper implementing ToCss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssLocalName(pub LocalName);

impl precomputed_hash::PrecomputedHash for CssLocalName {
    fn precomputed_hash(&self) -> u32 {
        self.0.precomputed_hash()
    }
}

impl cssparser::ToCss for CssLocalName {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(self.0.as_ref())
    }
}

impl From<&str> for CssLocalName {
    fn from(s: &str) -> Self {
        Self(LocalName::from(s))
    }
}

impl AsRef<str> for CssLocalName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

/// Namespace wrapper implementing ToCss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CssNamespace(pub Namespace);

impl precomputed_hash::PrecomputedHash for CssNamespace {
    fn precomputed_hash(&self) -> u32 {
        self.0.precomputed_hash()
    }
}

impl cssparser::ToCss for CssNamespace {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str(self.0.as_ref())
    }
}

impl From<&str> for CssNamespace {
    fn from(s: &str) -> Self {
        Self(Namespace::from(s))
    }
}

impl<'i> selectors::parser::Parser<'i> for NavSelectors {
    type Impl = NavSelectors;
    type Error = SelectorParseErrorKind<'i>;
}

/// No pseudo-elements are supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoElement {}

impl cssparser::ToCss for PseudoElement {
    fn to_css<W: fmt::Write>(&self, _dest: &mut W) -> fmt::Result {
        match *self {}
    }
}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = NavSelectors;

    fn accepts_state_pseudo_classes(&self) -> bool {
        match *self {}
    }

    fn valid_after_slotted(&self) -> bool {
        match *self {}
    }
}

/// No non-tree-structural pseudo-classes either; a static fragment has no
/// hover/focus state to match against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NonTSPseudoClass {}

impl selectors::parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = NavSelectors;

    fn is_active_or_hover(&self) -> bool {
        match *self {}
    }

    fn is_user_action_state(&self) -> bool {
        match *self {}
    }
}

impl cssparser::ToCss for NonTSPseudoClass {
    fn to_css<W: fmt::Write>(&self, _dest: &mut W) -> fmt::Result {
        match *self {}
    }
}

impl SelectorImpl for NavSelectors {
    type ExtraMatchingData<'a> = ();
    type AttrValue = IdentStr;
    type Identifier = IdentStr;
    type LocalName = CssLocalName;
    type NamespaceUrl = CssNamespace;
    type NamespacePrefix = IdentStr;
    type BorrowedLocalName = CssLocalName;
    type BorrowedNamespaceUrl = CssNamespace;
    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

/// An element of the arena, as seen by the selector matcher.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    pub dom: &'a ArenaDom,
    pub id: ArenaNodeId,
}

impl<'a> ElementRef<'a> {
    pub fn new(dom: &'a ArenaDom, id: ArenaNodeId) -> Self {
        Self { dom, id }
    }

    fn sibling_element(&self, forward: bool) -> Option<Self> {
        let step = |id: ArenaNodeId| {
            self.dom.get(id).map(|n| {
                if forward {
                    n.next_sibling
                } else {
                    n.prev_sibling
                }
            })
        };

        let mut current = step(self.id)?;
        while current.is_some() {
            if self.dom.is_element(current) {
                return Some(Self::new(self.dom, current));
            }
            current = step(current)?;
        }
        None
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("name", &self.dom.element_name(self.id))
            .finish()
    }
}

impl selectors::Element for ElementRef<'_> {
    type Impl = NavSelectors;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(self)
    }

    fn parent_element(&self) -> Option<Self> {
        let parent = self.dom.get(self.id)?.parent;
        self.dom
            .is_element(parent)
            .then(|| Self::new(self.dom, parent))
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.sibling_element(false)
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.sibling_element(true)
    }

    fn first_element_child(&self) -> Option<Self> {
        self.dom
            .element_children(self.id)
            .next()
            .map(|id| Self::new(self.dom, id))
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, name: &CssLocalName) -> bool {
        self.dom
            .element_name(self.id)
            .is_some_and(|n| n == &name.0)
    }

    fn has_namespace(&self, ns: &CssNamespace) -> bool {
        self.dom
            .element_namespace(self.id)
            .is_some_and(|n| n == &ns.0)
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.dom.element_name(self.id) == other.dom.element_name(other.id)
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&CssNamespace>,
        local_name: &CssLocalName,
        operation: &AttrSelectorOperation<&IdentStr>,
    ) -> bool {
        let Some(ArenaNodeData::Element { attrs, .. }) = self.dom.get(self.id).map(|n| &n.data)
        else {
            return false;
        };

        attrs
            .iter()
            .filter(|attr| match ns {
                NamespaceConstraint::Any => true,
                NamespaceConstraint::Specific(ns) => attr.name.ns == ns.0,
            })
            .find(|attr| attr.name.local == local_name.0)
            .is_some_and(|attr| operation.eval_str(&attr.value))
    }

    fn match_non_ts_pseudo_class(
        &self,
        pc: &NonTSPseudoClass,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        match *pc {}
    }

    fn match_pseudo_element(
        &self,
        pe: &PseudoElement,
        _context: &mut MatchingContext<'_, Self::Impl>,
    ) -> bool {
        match *pe {}
    }

    fn is_link(&self) -> bool {
        self.dom.has_tag(self.id, "a") && self.dom.get_attr(self.id, "href").is_some()
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &IdentStr, case_sensitivity: CaseSensitivity) -> bool {
        self.dom
            .element_id(self.id)
            .is_some_and(|elem_id| case_sensitivity.eq(elem_id.as_bytes(), id.0.as_bytes()))
    }

    fn has_class(&self, name: &IdentStr, case_sensitivity: CaseSensitivity) -> bool {
        self.dom
            .element_classes(self.id)
            .iter()
            .any(|c| case_sensitivity.eq(c.as_bytes(), name.0.as_bytes()))
    }

    fn imported_part(&self, _name: &IdentStr) -> Option<IdentStr> {
        None
    }

    fn is_part(&self, _name: &IdentStr) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.dom.children(self.id).all(|child| {
            match self.dom.get(child).map(|n| &n.data) {
                Some(ArenaNodeData::Element { .. }) => false,
                Some(ArenaNodeData::Text(t)) => t.is_empty(),
                _ => true,
            }
        })
    }

    fn is_root(&self) -> bool {
        let parent = self.dom.get(self.id).map(|n| n.parent);
        parent
            .and_then(|p| self.dom.get(p))
            .is_some_and(|p| matches!(p.data, ArenaNodeData::Document))
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn add_element_unique_hashes(&self, _filter: &mut selectors::bloom::BloomFilter) -> bool {
        false
    }

    fn has_custom_state(&self, _name: &IdentStr) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    const FRAGMENT: &str = r#"
        <main>
          <div class="brand"><p><a href="/">Acme</a></p></div>
          <div class="sections" id="nav"><h1>Products</h1><p>Intro</p></div>
          <div class="tools"><p>Search</p></div>
        </main>"#;

    #[test]
    fn test_class_selector() {
        let dom = parse_html(FRAGMENT);
        let selector = Selector::parse(".sections").unwrap();
        let found = selector.select_first(&dom, dom.document()).unwrap();
        assert_eq!(dom.element_id(found), Some("nav"));
    }

    #[test]
    fn test_structural_selector() {
        let dom = parse_html(FRAGMENT);
        let selector = Selector::parse("main > div:nth-child(3)").unwrap();
        let found = selector.select_first(&dom, dom.document()).unwrap();
        assert!(dom.has_class(found, "tools"));
    }

    #[test]
    fn test_selector_list_in_document_order() {
        let dom = parse_html(FRAGMENT);
        let selector = Selector::parse("p, h1").unwrap();
        let tags: Vec<_> = selector
            .select_all(&dom, dom.document())
            .into_iter()
            .filter_map(|id| dom.element_name(id).map(|n| n.to_string()))
            .collect();
        assert_eq!(tags, vec!["p", "h1", "p", "p"]);
    }

    #[test]
    fn test_attribute_selector() {
        let dom = parse_html(FRAGMENT);
        let selector = Selector::parse(r#"a[href="/"]"#).unwrap();
        assert!(selector.select_first(&dom, dom.document()).is_some());
    }

    #[test]
    fn test_no_match() {
        let dom = parse_html(FRAGMENT);
        let selector = Selector::parse(".missing").unwrap();
        assert!(selector.select_first(&dom, dom.document()).is_none());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = Selector::parse("div >").unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
        assert!(Selector::parse("a:hover").is_err());
    }
}
