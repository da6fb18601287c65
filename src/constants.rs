// Constants module - centralized default values for configuration
//
// This module defines all default values used throughout the codebase.
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Image service defaults
// =============================================================================

/// Default image service base URL
pub const DEFAULT_SERVER: &str = "http://localhost:8888";

// =============================================================================
// Media normalization defaults
// =============================================================================

/// Default path prefix marking application-served media
pub const DEFAULT_MEDIA_URL: &str = "/media/";

/// Default location media-relative paths are served from
pub const DEFAULT_MEDIA_SERVER: &str = "http://localhost:8000/media";
