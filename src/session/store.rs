//!
//! # Session Store
//!
//! Owns the answer to "who is logged in" for the lifetime of the process and
//! keeps it durable across runs via [`SessionStorage`]. Every mutating
//! operation writes through to disk inside the same call that swaps the
//! in-memory copy, so the two can never observably diverge; every mutating
//! method takes `&mut self`, which makes the write path a critical section
//! even if the store is moved across threads.
//!
//! The store is an owned, injectable value rather than ambient global state,
//! so tests construct isolated instances against temporary session files.

use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::Session;
use crate::session::{LoginRequest, ProfileUpdateRequest, RegisterRequest};
use crate::storage::SessionStorage;
use log::{debug, info};
use validator::Validate;

pub struct SessionStore {
    api: ApiClient,
    storage: SessionStorage,
    current: Option<Session>,
}

impl SessionStore {
    /// Creates a store with no session loaded. Call [`restore`](Self::restore)
    /// once at startup before reading [`current`](Self::current).
    pub fn new(api: ApiClient, storage: SessionStorage) -> Self {
        Self {
            api,
            storage,
            current: None,
        }
    }

    /// The logged-in session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Loads the persisted session into memory, if one is present.
    ///
    /// Never fails: a missing or corrupt record means "no session" (the
    /// corrupt case is logged by the storage layer). Runs once at startup.
    pub fn restore(&mut self) {
        self.current = self.storage.load();
        match &self.current {
            Some(session) => debug!("Restored session for {}", session.email),
            None => debug!("No persisted session found"),
        }
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the response body becomes the new session, persisted to
    /// disk and memory before this returns. On failure nothing is mutated and
    /// the server's message propagates unmodified.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, AppError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let session: Session = self.api.post("/auth/login", &request).await?;
        self.accept(session.clone())?;
        info!("Logged in as {}", session.email);
        Ok(session)
    }

    /// Creates an account and logs it in; same contract as [`login`](Self::login).
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let session: Session = self.api.post("/auth/register", &request).await?;
        self.accept(session.clone())?;
        info!("Registered and logged in as {}", session.email);
        Ok(session)
    }

    /// Changes the display name of the current session.
    ///
    /// The backend echoes the full user record; id, email, and token come
    /// back unchanged. Calling this without a session is tolerated: the
    /// request goes out unauthenticated and the backend's rejection is
    /// surfaced rather than pre-checked here.
    pub async fn update_profile(&mut self, name: &str) -> Result<Session, AppError> {
        let request = ProfileUpdateRequest {
            name: name.to_string(),
        };
        request.validate()?;

        let session: Session = self.api.put("/auth/profile", &request).await?;
        self.accept(session.clone())?;
        Ok(session)
    }

    /// Clears both the in-memory and the persisted session. Never fails.
    pub fn logout(&mut self) {
        self.storage.clear();
        self.current = None;
        info!("Logged out");
    }

    /// Accepts a server-issued session: disk first, then memory. A failed
    /// disk write aborts the whole operation with memory untouched, keeping
    /// the two copies equal at every observable point.
    fn accept(&mut self, session: Session) -> Result<(), AppError> {
        self.storage.save(&session)?;
        self.current = Some(session);
        Ok(())
    }
}
