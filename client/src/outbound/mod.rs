//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed SportHub API client and resource clients
//! - **storage**: cap-std file store for the persisted bearer token
//! - **checkout**: hosted payment page redirect
//!
//! Adapters are thin translators between domain types and wire or disk
//! representations. They contain no business logic.

pub mod checkout;
pub mod http;
pub mod storage;
