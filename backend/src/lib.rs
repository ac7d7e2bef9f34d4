//! Travel landing page backend.
//!
//! A single-route web application: registration, login, and logout over
//! cookie sessions, plus server-rendered read-only listings of
//! destinations, travel packages, active promotions, and aggregate
//! statistics fetched from PostgreSQL.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
