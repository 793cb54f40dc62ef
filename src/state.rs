use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::db::DbPool;
use crate::live::SnapshotHub;

/// One server-side session: the owning user and the XSRF token minted for
/// it at login. Tokens are per session, so a login elsewhere never
/// invalidates another live session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub xsrf_token: String,
}

/// Server-side session store mapping session tokens to sessions.
pub type SessionStore = Arc<Mutex<HashMap<String, Session>>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub sessions: SessionStore,
    pub hub: SnapshotHub,
}
