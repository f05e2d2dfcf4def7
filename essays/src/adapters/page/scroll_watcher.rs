//! Scroll-animation watcher
//!
//! One watcher serves the whole page. Elements are registered with
//! `observe`; the first time a registered element enters the viewport the
//! visible class is applied to it.

use std::collections::HashMap;
use once_cell::sync::OnceCell;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{ElementRef, ScrollWatcher, VISIBLE_CLASS};

static GLOBAL_WATCHER: OnceCell<Arc<ScrollAnimationWatcher>> = OnceCell::new();

/// Intersection settings for entrance animations
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    ///
    /// Informational: there is no viewport geometry here, callers report an
    /// intersection ratio already measured against this margin.
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Process-wide intersection watcher
pub struct ScrollAnimationWatcher {
    options: ObserverOptions,
    /// element -> whether the visible class has been applied
    registrations: RwLock<HashMap<ElementRef, bool>>,
}

impl ScrollAnimationWatcher {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            registrations: RwLock::new(HashMap::new()),
        }
    }

    /// The single shared instance
    pub fn global() -> Arc<Self> {
        GLOBAL_WATCHER
            .get_or_init(|| Arc::new(Self::new(ObserverOptions::default())))
            .clone()
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Intersection callback. Applies the visible class if `element` is
    /// registered, not yet animated, and at least `threshold` visible.
    /// Returns whether this call applied the class.
    pub fn entered_viewport(&self, element: &ElementRef, intersection_ratio: f64) -> bool {
        if intersection_ratio <= 0.0 || intersection_ratio < self.options.threshold {
            return false;
        }

        let mut registrations = self.registrations.write().unwrap_or_else(|e| e.into_inner());
        match registrations.get_mut(element) {
            Some(animated) if !*animated => {
                *animated = true;
                tracing::trace!("Applied .{} to {}", VISIBLE_CLASS, element);
                true
            }
            _ => false,
        }
    }

    pub fn is_observed(&self, element: &ElementRef) -> bool {
        self.registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(element)
    }

    /// Whether the visible class has been applied to `element`
    pub fn is_animated(&self, element: &ElementRef) -> bool {
        self.registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(element)
            .copied()
            .unwrap_or(false)
    }
}

impl ScrollWatcher for ScrollAnimationWatcher {
    /// Element refs are positional, so observing a ref again means a freshly
    /// inserted node took that position: it starts out not yet animated.
    fn observe(&self, element: &ElementRef) {
        self.registrations
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(element.clone(), false);
    }
}

/// Watcher that ignores registrations
pub struct NoopScrollWatcher;

impl ScrollWatcher for NoopScrollWatcher {
    fn observe(&self, _element: &ElementRef) {}
}
