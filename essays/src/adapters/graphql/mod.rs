//! GraphQL adapter
//!
//! reqwest-backed implementation of the `GraphqlTransport` port.

pub mod client;

pub use client::HasuraClient;
