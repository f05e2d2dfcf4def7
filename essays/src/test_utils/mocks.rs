//! Mock implementations of port traits
//!
//! In-memory implementations that can be scripted for testing and that keep
//! a record of every interaction.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::adapters::page::document::class_token_count;
use crate::domain::ports::{
    Container, ElementRef, GraphqlRequest, GraphqlTransport, ScrollWatcher,
    ANIMATE_ON_SCROLL_CLASS,
};
use crate::error::FeedError;

// ============================================================================
// Scripted GraphQL transport
// ============================================================================

/// Answers requests from a queue of scripted results, in order.
/// An exhausted queue answers with a fetch failure.
#[derive(Default)]
pub struct MockGraphqlTransport {
    responses: RwLock<VecDeque<Result<serde_json::Value, String>>>,
    requests: RwLock<Vec<GraphqlRequest>>,
}

impl MockGraphqlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body
    pub fn with_response(self, body: serde_json::Value) -> Self {
        self.responses.write().unwrap().push_back(Ok(body));
        self
    }

    /// Queue a transport failure
    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<GraphqlRequest> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl GraphqlTransport for MockGraphqlTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, FeedError> {
        self.requests.write().unwrap().push(request.clone());

        match self.responses.write().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(FeedError::Fetch(message)),
            None => Err(FeedError::Fetch("no scripted response".to_string())),
        }
    }
}

// ============================================================================
// In-memory container
// ============================================================================

/// Container that stores the last markup written to it
pub struct InMemoryContainer {
    id: String,
    contents: RwLock<String>,
    replacements: AtomicUsize,
}

impl InMemoryContainer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            contents: RwLock::new(String::new()),
            replacements: AtomicUsize::new(0),
        }
    }

    pub fn contents(&self) -> String {
        self.contents.read().unwrap().clone()
    }

    /// How many times `replace_contents` was called
    pub fn replace_count(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl Container for InMemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace_contents(&self, markup: &str) {
        *self.contents.write().unwrap() = markup.to_string();
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }

    fn animated_elements(&self) -> Vec<ElementRef> {
        let count = class_token_count(&self.contents.read().unwrap(), ANIMATE_ON_SCROLL_CLASS);
        (0..count).map(|i| ElementRef::new(&self.id, i)).collect()
    }
}

// ============================================================================
// Recording scroll watcher
// ============================================================================

/// Watcher stub that only remembers what it was asked to observe
#[derive(Default)]
pub struct RecordingScrollWatcher {
    observed: RwLock<Vec<ElementRef>>,
}

impl RecordingScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed(&self) -> Vec<ElementRef> {
        self.observed.read().unwrap().clone()
    }
}

impl ScrollWatcher for RecordingScrollWatcher {
    fn observe(&self, element: &ElementRef) {
        self.observed.write().unwrap().push(element.clone());
    }
}
