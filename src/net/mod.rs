//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the four backend operations, `transport` abstracts how a request
//! reaches the network (gloo-net in the browser, reqwest natively), `error`
//! classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
