use crate::{DbError, UserStore};
use async_trait::async_trait;
use core_types::{NewUser, Outcome, User, UserId};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// An in-memory `UserStore` for tests.
///
/// Ids are assigned from 1 upwards and never reused, like a `SERIAL` column.
/// Every call is counted, and the store can be switched into a failing mode to
/// exercise the error path of callers.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    state: Mutex<MemoryState>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<User>,
    last_id: UserId,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `DbError::Unavailable`.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of store operations attempted so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Current rows, bypassing the call counter.
    pub async fn snapshot(&self) -> Vec<User> {
        self.state.lock().await.rows.clone()
    }

    fn enter(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        self.enter()?;
        Ok(self.state.lock().await.rows.clone())
    }

    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        self.enter()?;
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let created = user.into_user(state.last_id);
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: UserId, user: NewUser) -> Result<Outcome<User>, DbError> {
        self.enter()?;
        let mut state = self.state.lock().await;
        let row = state.rows.iter_mut().find(|row| row.id == id);
        Ok(Outcome::from_option(row.map(|row| {
            row.name = user.name;
            row.email = user.email;
            row.clone()
        })))
    }

    async fn delete(&self, id: UserId) -> Result<Outcome<()>, DbError> {
        self.enter()?;
        let mut state = self.state.lock().await;
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        Ok(Outcome::from_rows_affected((before - state.rows.len()) as u64))
    }
}
