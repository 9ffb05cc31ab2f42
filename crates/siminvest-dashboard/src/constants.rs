//! Centralized constants for the SimInvest dashboard
//!
//! This module contains product-wide constants. Deployment-specific
//! settings (credentials, endpoints, API keys) live in config.toml.

// =============================================================================
// API Endpoints
// =============================================================================

/// Gemini API base URL (model and key appended per request)
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default narrative analysis model
pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";

/// Supabase REST path prefix (appended to the project URL)
pub const CLOUD_REST_PATH: &str = "/rest/v1";

/// Cloud table holding the record collection
pub const CLOUD_RECORDS_TABLE: &str = "investment_records";

// =============================================================================
// Chart Scaling
// =============================================================================

/// Radar chart ceiling in billions. A fixed normalization constant for the
/// sector proportion chart, never derived from the data.
pub const RADAR_FULL_MARK: f64 = 150.0;

/// Number of sector summary cards shown on the sector view
pub const TOP_SECTOR_CARDS: usize = 5;

// =============================================================================
// File Names
// =============================================================================

/// Snapshot database filename
pub const SNAPSHOT_FILENAME: &str = "siminvest.sqlite";

/// Session marker filename
pub const SESSION_FILENAME: &str = "session.json";

/// Quarterly matrix CSV filename
pub const QUARTERLY_MATRIX_FILENAME: &str = "quarterly_matrix.csv";

/// Sector matrix CSV filename
pub const SECTOR_MATRIX_FILENAME: &str = "sector_matrix.csv";

/// PMA/PMDN table CSV filename
pub const CAPITAL_MATRIX_FILENAME: &str = "capital_matrix.csv";

/// Per-region summary CSV filename
pub const REGION_SUMMARY_FILENAME: &str = "region_summary.csv";

// =============================================================================
// Rate Limiting
// =============================================================================

/// HTTP retries for cloud and AI requests
pub const MAX_HTTP_RETRIES: u32 = 3;

// =============================================================================
// Placeholders
// =============================================================================

/// Rendered where a share of a zero total is indeterminate
pub const SHARE_PLACEHOLDER: &str = "—";
