//! Application State
//!
//! The single owned snapshot of all application data. There are no ambient
//! globals: the state is constructed once at startup, handed to the
//! coordinator, and mutated only through the coordinator's mutation entry
//! points (`write` is crate-private — the single-writer rule is enforced by
//! visibility, not convention). Everything else gets clones.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::shared::{AppData, Settings, User};

/// The explicitly owned, single-writer application snapshot
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    inner: Arc<RwLock<AppData>>,
}

impl ApplicationState {
    /// Clone of the full aggregate, captured at call time
    pub async fn read(&self) -> AppData {
        self.inner.read().await.clone()
    }

    /// Run a closure against the aggregate without cloning it
    pub async fn with<T>(&self, f: impl FnOnce(&AppData) -> T) -> T {
        f(&*self.inner.read().await)
    }

    /// Current settings
    pub async fn settings(&self) -> Settings {
        self.with(|data| data.settings.clone()).await
    }

    /// Roster with credentials stripped, for read-only consumers
    pub async fn users_redacted(&self) -> Vec<User> {
        self.with(|data| data.users_redacted()).await
    }

    /// Mutate the aggregate. Crate-private: only the coordinator's mutation
    /// entry points may write.
    pub(crate) async fn write<T>(&self, f: impl FnOnce(&mut AppData) -> T) -> T {
        f(&mut *self.inner.write().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Role, Service};

    #[tokio::test]
    async fn test_read_is_a_snapshot() {
        let state = ApplicationState::default();
        let before = state.read().await;
        state
            .write(|data| data.submissions.push(Service::new()))
            .await;
        // The earlier clone is unaffected by later writes.
        assert!(before.submissions.is_empty());
        assert_eq!(state.read().await.submissions.len(), 1);
    }

    #[tokio::test]
    async fn test_with_borrows_without_cloning() {
        let state = ApplicationState::default();
        state
            .write(|data| data.submissions.push(Service::new()))
            .await;
        let count = state.with(|data| data.submissions.len()).await;
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_users_redacted() {
        let state = ApplicationState::default();
        state
            .write(|data| data.users.push(User::new("frank", "pw", Role::User)))
            .await;
        let users = state.users_redacted().await;
        assert_eq!(users.len(), 1);
        assert!(users[0].password.is_none());
    }
}
