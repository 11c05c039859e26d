//! Per-browser session tracking.
//!
//! A session is the `nusa_session` cookie. Each session may have at most one
//! translation in flight; other sessions are never blocked by it.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use dashmap::DashSet;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "nusa_session";

/// Session ids with an outstanding translation.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    in_flight: DashSet<Uuid>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` busy, or returns `None` if it already is.
    pub fn try_begin(&self, id: Uuid) -> Option<InFlight<'_>> {
        self.in_flight
            .insert(id)
            .then(|| InFlight { registry: self, id })
    }

    pub fn is_busy(&self, id: Uuid) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

/// Clears the busy mark when dropped, including on early return.
#[derive(Debug)]
pub struct InFlight<'a> {
    registry: &'a SessionRegistry,
    id: Uuid,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.registry.in_flight.remove(&self.id);
    }
}

/// The caller's session id and whether it was freshly issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub is_new: bool,
}

impl Session {
    /// Reads the session cookie, issuing a new id if absent or invalid.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value).ok())
            .map_or_else(
                || Self {
                    id: Uuid::new_v4(),
                    is_new: true,
                },
                |id| Self { id, is_new: false },
            )
    }

    /// `Set-Cookie` value, only for freshly issued ids.
    pub fn set_cookie(&self) -> Option<String> {
        self.is_new
            .then(|| format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id))
    }
}
