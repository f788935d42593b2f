//! Shared application state.
//!
//! # Responsibility
//! - Hold the process-wide storage connection behind a lock.
//!
//! # Invariants
//! - Request handlers acquire the connection for the duration of their
//!   storage work only; the guard releases it on every exit path.
//! - No await point is crossed while the guard is held.

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle shared with every request handler.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquires the scoped storage connection for one request.
    ///
    /// A poisoned lock is recovered rather than propagated: the connection
    /// itself holds no partial transaction state across handler calls.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
