//! Open Source Manager: repository dashboard core.
//!
//! This crate models a small open-source project dashboard. A user submits a
//! GitHub repository URL; once the URL is accepted the dashboard loads the
//! repository's contributors and its task board.
//!
//! # Architecture
//!
//! Open Source Manager follows hexagonal architecture principles:
//!
//! - **Domain**: Validated records and enumerations with no I/O
//! - **Ports**: Async traits for connecting to repositories, fetching
//!   records, and publishing notifications
//! - **Adapters**: Simulated and in-memory implementations of the ports
//!
//! # Modules
//!
//! - [`repository`]: URL validation and busy-guarded submission
//! - [`notification`]: Transient user-facing notices
//! - [`view`]: Generation-guarded asynchronous record views
//! - [`contributor`]: Contributor registry
//! - [`task`]: Four-column task board
//! - [`shell`]: Selected repository, dashboard mounting, and theme
//! - [`render`]: Text rendering of shell snapshots
//! - [`config`]: Environment-driven configuration
//! - [`fixtures`]: JSON fixture files replacing the sample records

pub mod config;
pub mod contributor;
pub mod fixtures;
pub mod notification;
pub mod render;
pub mod repository;
pub mod shell;
pub mod task;
pub mod view;
