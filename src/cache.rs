use chrono::NaiveDate;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::booking::session::Session;

pub type SharedSession = Arc<Mutex<Session>>;

/// Live browsing sessions. Idle sessions are evicted, which discards their appointments.
#[derive(Clone)]
pub struct SessionCache {
    sessions: Cache<Uuid, SharedSession>,
}

impl SessionCache {
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        SessionCache {
            sessions: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(idle)
                .build(),
        }
    }

    pub async fn open(&self, today: NaiveDate) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(Session::new(id, today)));
        self.sessions.insert(id, session.clone()).await;
        info!("opened session {}", id);
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.get(&id).await
    }

    pub fn entry_count(&self) -> u64 {
        self.sessions.entry_count()
    }

    /// `false` when the session was unknown or already evicted
    pub async fn close(&self, id: Uuid) -> bool {
        let closed = self.sessions.remove(&id).await.is_some();
        if closed {
            info!("closed session {}", id);
        }
        closed
    }
}
