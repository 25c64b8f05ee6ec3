//! In-flight gate: at most one generation per client session at a time.
//!
//! A second request for a session that is still waiting on the provider is rejected
//! instead of queued, so one click never bills two completions. The slot is released
//! when the returned guard drops, whether the generation succeeded or failed.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Default)]
pub struct InFlightGate {
    sessions: Arc<Mutex<HashSet<String>>>,
}

/// Holds a session's slot until dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    sessions: Arc<Mutex<HashSet<String>>>,
    session_id: String,
}

impl InFlightGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the slot for `session_id`, or fails with `Conflict` if it is taken.
    pub fn try_acquire(&self, session_id: &str) -> Result<InFlightGuard, AppError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("in-flight gate lock poisoned")))?;

        if !sessions.insert(session_id.to_string()) {
            return Err(AppError::Conflict(session_id.to_string()));
        }
        debug!("Generation slot acquired for session {session_id}");

        Ok(InFlightGuard {
            sessions: Arc::clone(&self.sessions),
            session_id: session_id.to_string(),
        })
    }

    /// Acquires a slot only when the request names a session.
    pub fn acquire_for(&self, session_id: Option<&str>) -> Result<Option<InFlightGuard>, AppError> {
        match session_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => self.try_acquire(id).map(Some),
            None => Ok(None),
        }
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.remove(&self.session_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_conflicts_until_release() {
        let gate = InFlightGate::new();
        let guard = gate.try_acquire("abc").unwrap();
        assert!(matches!(gate.try_acquire("abc"), Err(AppError::Conflict(id)) if id == "abc"));
        assert_eq!(gate.in_flight(), 1);

        drop(guard);
        assert_eq!(gate.in_flight(), 0);
        assert!(gate.try_acquire("abc").is_ok());
    }

    #[test]
    fn test_sessions_are_independent() {
        let gate = InFlightGate::new();
        let _a = gate.try_acquire("a").unwrap();
        let _b = gate.try_acquire("b").unwrap();
        assert_eq!(gate.in_flight(), 2);
    }

    #[test]
    fn test_no_session_means_no_gating() {
        let gate = InFlightGate::new();
        assert!(gate.acquire_for(None).unwrap().is_none());
        assert!(gate.acquire_for(Some("  ")).unwrap().is_none());
        assert_eq!(gate.in_flight(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let gate = InFlightGate::new();
        let clone = gate.clone();
        let _guard = gate.try_acquire("shared").unwrap();
        assert!(clone.try_acquire("shared").is_err());
    }
}
