//! Canvas Registry Module
//! Lookup of canvases by element id, playing the document's role for the
//! chart component. Single-threaded by design, so handles are `Rc`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Canvas;

pub type CanvasHandle = Rc<RefCell<Canvas>>;

/// Named canvas surfaces available to chart components.
#[derive(Default)]
pub struct CanvasRegistry {
    canvases: HashMap<String, CanvasHandle>,
}

impl CanvasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canvas under its own id, replacing any previous surface
    /// with that id. Returns the shared handle.
    pub fn insert(&mut self, canvas: Canvas) -> CanvasHandle {
        let id = canvas.id().to_string();
        let handle = Rc::new(RefCell::new(canvas));
        self.canvases.insert(id, Rc::clone(&handle));
        handle
    }

    pub fn get(&self, id: &str) -> Option<CanvasHandle> {
        self.canvases.get(id).map(Rc::clone)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.canvases.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let mut registry = CanvasRegistry::new();
        registry.insert(Canvas::new("histogram", 100, 50));
        assert!(registry.get("histogram").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn handles_share_the_same_surface() {
        let mut registry = CanvasRegistry::new();
        let a = registry.insert(Canvas::new("c", 8, 8));
        let b = registry.get("c").unwrap();
        a.borrow_mut().clear();
        assert!(b.borrow().is_blank());
        assert!(Rc::ptr_eq(&a, &b));
    }
}
