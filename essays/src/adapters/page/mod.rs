//! Page adapters: the HTML document container and the scroll watcher

pub mod document;
pub mod scroll_watcher;

pub use document::HtmlDocument;
pub use scroll_watcher::{NoopScrollWatcher, ObserverOptions, ScrollAnimationWatcher};
