//! Reference handles to built elements.

use std::sync::{Arc, Mutex, MutexGuard};

use super::element::Element;

/// A shared handle that receives the element a block builds.
///
/// Attach it with [`VisualBlock::node_ref`](crate::VisualBlock::node_ref);
/// every call to `build` stores a copy of the result. Clones share the same
/// slot.
///
/// # Example
///
/// ```rust
/// use viberante::{NodeRef, VisualBlock};
///
/// let handle = NodeRef::new();
/// let _ = VisualBlock::new().tag("section").node_ref(&handle).build();
///
/// assert_eq!(handle.get().unwrap().tag(), "section");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    slot: Arc<Mutex<Option<Element>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last element stored, if any.
    pub fn get(&self) -> Option<Element> {
        self.lock().clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Empties the handle.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub(crate) fn set(&self, element: &Element) {
        *self.lock() = Some(element.clone());
    }

    fn lock(&self) -> MutexGuard<'_, Option<Element>> {
        // A poisoned slot still holds a whole element.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
