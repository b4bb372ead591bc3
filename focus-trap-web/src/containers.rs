use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;
use yew::NodeRef;

/// Externally owned, mutable set of extra container references treated as
/// part of the same logical trap (sibling panels, composed overlays).
///
/// The trap never owns these; it takes a fresh snapshot at every containment
/// check, so callers may add and remove references between event dispatches.
/// Clones share the same underlying set, and equality is pointer identity so
/// a shared handle stays stable across re-renders.
#[derive(Clone, Debug, Default)]
pub struct ExtraContainers(Rc<RefCell<Vec<NodeRef>>>);

impl ExtraContainers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container reference to the set.
    pub fn push(&self, node: NodeRef) {
        self.0.borrow_mut().push(node);
    }

    /// Drop every reference from the set.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Fresh snapshot of the references that currently resolve to elements.
    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        self.0
            .borrow()
            .iter()
            .filter_map(NodeRef::cast::<Element>)
            .collect()
    }
}

impl PartialEq for ExtraContainers {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
