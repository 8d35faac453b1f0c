//! host-document boundary
//!
//! the engine never touches a real document tree; the host supplies element
//! handles and answers structural queries through [`DomAdapter`]. listener
//! attach/detach is likewise delegated through [`ListenerHost`].

mod event;

pub use event::{EventDetail, EventState, KeyInput, PointerInput};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// stable handle identifying one host element
///
/// the host mints one id per element and keeps the association for as long as
/// the element participates in dispatch; the engine only compares and stores
/// handles, it never derives meaning from their numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ElementId(pub u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// mint a fresh process-unique handle
    pub fn next() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// one node on an event's propagation path
///
/// only elements matter to target resolution; the other variants exist so
/// hosts can hand the path over without filtering it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathNode {
    Element(ElementId),
    Text,
    ShadowRoot,
    Document,
}

impl PathNode {
    pub fn element(self) -> Option<ElementId> {
        match self {
            PathNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// structural queries the engine needs from the host document
pub trait DomAdapter {
    /// attribute value on an element, `None` when absent
    fn attribute(&self, el: ElementId, name: &str) -> Option<String>;

    /// true when the attribute is present (even if empty)
    fn has_attribute(&self, el: ElementId, name: &str) -> bool {
        self.attribute(el, name).is_some()
    }

    /// true when `node` is `ancestor` or a descendant of it, without crossing
    /// shadow boundaries
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

    /// nearest ancestor of `el` matching `selector`, piercing shadow roots
    ///
    /// this is the closest-across-roots primitive; the default resolver never
    /// calls it, only the pierce resolver does.
    fn closest_pierce(&self, selector: &str, el: ElementId) -> Option<ElementId>;

    /// lowercase tag name, used by the `#log` built-in
    fn tag_name(&self, el: ElementId) -> String;
}

/// native listener plumbing, owned by the host
pub trait ListenerHost {
    fn add_listener(&mut self, el: ElementId, event_name: &str);
    fn remove_listener(&mut self, el: ElementId, event_name: &str);
}
