//! Shared Module
//!
//! Domain types used by every part of the sync engine. All wire-facing types
//! serialize with camelCase field names so the aggregate round-trips
//! unchanged against the spreadsheet-backed remote endpoint.

/// Service submission records and their detail line items
pub mod service;

/// User roster types and credential redaction
pub mod user;

/// Application settings
pub mod settings;

/// The full application-data aggregate
pub mod app_data;

/// Price table and add-on categories
pub mod constants;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use app_data::AppData;
pub use error::{RemoteError, SyncError};
pub use service::{
    BatteryDetail, CategorizedAddon, CustomService, Service, ServiceSelection, ServiceStatus,
    TyreDetail,
};
pub use settings::Settings;
pub use user::{Role, User};
