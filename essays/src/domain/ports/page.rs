//! Page collaborator ports
//!
//! The feed owns the children of one container element and registers what it
//! inserts with a shared scroll-animation watcher. Neither collaborator is
//! owned by the feed.

/// Class marking elements that fade in when scrolled into view
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";

/// Class the watcher applies once an observed element enters the viewport
pub const VISIBLE_CLASS: &str = "animated";

/// Reference to an element inside a container.
///
/// `index` is the element's position among the container's
/// `.animate-on-scroll` descendants, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef {
    pub container_id: String,
    pub index: usize,
}

impl ElementRef {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self {
            container_id: container_id.into(),
            index,
        }
    }
}

impl std::fmt::Display for ElementRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} .{}[{}]",
            self.container_id, ANIMATE_ON_SCROLL_CLASS, self.index
        )
    }
}

/// The element whose entire child content the feed replaces
pub trait Container: Send + Sync {
    /// The element id (without `#`)
    fn id(&self) -> &str;

    /// Replace all children with `markup` in one step
    fn replace_contents(&self, markup: &str);

    /// Every `.animate-on-scroll` element currently inside the container
    fn animated_elements(&self) -> Vec<ElementRef>;
}

/// Process-wide intersection watcher for entrance animations
pub trait ScrollWatcher: Send + Sync {
    /// Register an element to receive one "entered viewport" signal
    fn observe(&self, element: &ElementRef);
}
