//! Session handling for the portal views.
//!
//! Replaces scattered token reads with a single store that owns the
//! current session and enforces its expiry on every read. Expiry is
//! checked against a caller-supplied clock so tests never sleep.

use std::time::{Duration, SystemTime};

use thiserror::Error;

use neurotriage_model::Role;

/// An authenticated session as issued at login.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub issued_at: SystemTime,
    pub ttl: Duration,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role, issued_at: SystemTime, ttl: Duration) -> Self {
        Session {
            token: token.into(),
            role,
            issued_at,
            ttl,
        }
    }

    pub fn expires_at(&self) -> SystemTime {
        self.issued_at + self.ttl
    }

    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        now >= self.expires_at()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no authenticated session")]
    NotAuthenticated,

    #[error("session expired")]
    Expired,
}

/// Holds at most one session and enforces the expiry contract.
///
/// Reading an expired session invalidates it, so after one `Expired`
/// failure subsequent reads report `NotAuthenticated` until a new login
/// opens the store again.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Installs a freshly issued session, replacing any previous one.
    pub fn open(&mut self, session: Session) {
        self.current = Some(session);
    }

    /// The current session, checked against `now`.
    pub fn read(&mut self, now: SystemTime) -> Result<&Session, SessionError> {
        if self.current.as_ref().is_some_and(|s| s.is_expired_at(now)) {
            log::debug!("session expired, invalidating");
            self.current = None;
            return Err(SessionError::Expired);
        }
        self.current.as_ref().ok_or(SessionError::NotAuthenticated)
    }

    /// Bearer token for an outgoing request.
    pub fn token(&mut self, now: SystemTime) -> Result<&str, SessionError> {
        self.read(now).map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self, now: SystemTime) -> bool {
        matches!(&self.current, Some(s) if !s.is_expired_at(now))
    }

    /// Explicit logout.
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}
