//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 4040;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default SQLite database URL (created on first run)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://crewboard.db?mode=rwc";

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// SESSION ROLES
// =============================================================================

/// Session role identifiers
pub mod roles {
    pub const REPRESENTATIVE: &str = "representative";
    pub const ADMINISTRATOR: &str = "administrator";
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission ledger statuses
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const SCORED: &str = "scored";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum task title length
pub const MAX_TASK_TITLE_LENGTH: u64 = 256;

/// Maximum task description length
pub const MAX_TASK_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum submission link length
pub const MAX_LINK_LENGTH: u64 = 2048;

/// Phone number length (digits)
pub const PHONE_LENGTH: usize = 10;
