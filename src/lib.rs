//! WhatsApp Phone Lookup Bot Library
//!
//! This library provides the core functionality for the WhatsApp phone lookup
//! bot: webhook routing, offline number parsing, external validation API
//! clients, result aggregation, and reply formatting.
//!
//! # Modules
//!
//! - `aggregator`: Fan-out over all lookup sources and result merging.
//! - `config`: Configuration management.
//! - `errors`: Lookup error types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Ordered lookup result and aggregate outcome.
//! - `parser`: Offline phone number parsing source.
//! - `reply`: Plain-text reply rendering.
//! - `services`: External validation API clients (numverify, numlookup).
//! - `twiml`: Outbound messaging envelope.

pub mod aggregator;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod reply;
pub mod services;
pub mod twiml;
