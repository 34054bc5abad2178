//! SportHub client library.
//!
//! Typed access to the SportHub activity and facility booking API, plus the
//! session model and route guards the command-line front-end is built on.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: entities, drafts, session state and use-cases;
//! - [`outbound`]: reqwest, cap-std and checkout adapters for the domain ports;
//! - [`inbound`]: the clap command-line views;
//! - [`config`] and [`telemetry`]: process-level wiring for the binary.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;
