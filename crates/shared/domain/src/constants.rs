//! Domain-level constants.
//!
//! These constants define the directory's schema limits and the fixed
//! messages shown when something goes wrong.

// =============================================================================
// Validation
// =============================================================================

/// Maximum length of an email address (characters)
pub const MAX_EMAIL_LENGTH: u64 = 255;

/// Maximum length of a username (characters)
pub const MAX_USERNAME_LENGTH: u64 = 255;

// =============================================================================
// Messages
// =============================================================================

/// Message returned by the API for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Message shown by the client when the user list cannot be loaded.
pub const LOAD_USERS_ERROR_MESSAGE: &str =
    "An error occurred while loading users. Please try again later.";

// =============================================================================
// API
// =============================================================================

/// Path of the user listing endpoint
pub const USERS_PATH: &str = "/api/users";
