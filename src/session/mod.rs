pub mod store;

use serde::Serialize;
use validator::Validate;

// Re-export the store type, which is the module's main surface
pub use store::SessionStore;

/// Payload for a login request.
#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password, sent as entered. The length rule applies at
    /// registration only; on login the backend is the authority on whether
    /// the credentials are valid.
    pub password: String,
}

/// Payload for a new account registration request.
#[derive(Debug, Serialize, Validate)]
pub struct RegisterRequest {
    /// Display name for the new account.
    /// Must be between 1 and 50 characters; the backend imposes no charset.
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Payload for a display-name change.
#[derive(Debug, Serialize, Validate)]
pub struct ProfileUpdateRequest {
    /// The new display name.
    /// Must be between 1 and 50 characters.
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}
