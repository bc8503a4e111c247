use serde::{Deserialize, Serialize};

/// The cached authenticated identity.
///
/// This is exactly the body the backend returns from login, register, and
/// profile update, and exactly the record persisted to the session file:
/// the two are never allowed to diverge (see `session::SessionStore`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier of the user.
    pub id: i64,
    /// Display name, editable via profile update.
    pub name: String,
    /// Email address used to log in.
    pub email: String,
    /// Opaque bearer credential issued by the backend and echoed on every
    /// authorized request. The client never inspects it.
    pub token: String,
}
