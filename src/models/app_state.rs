use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::Settings;
use crate::error::ConfigError;
use crate::models::page_session::PageSession;
use crate::validator::Validator;

/// Upper bound on concurrently tracked visitors; the least recently seen go first.
const MAX_SESSIONS: usize = 10_000;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub validator: Validator,
    pub sessions: Arc<Mutex<HashMap<String, PageSession>>>,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let validator = Validator::new(&settings.contact_rule())?;
        Ok(Self {
            settings: Arc::new(settings),
            validator,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            custom_css: None,
        })
    }

    /// Run `f` against the visitor's session, creating it on first use.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut PageSession) -> R) -> R {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if !sessions.contains_key(session_id) && sessions.len() >= MAX_SESSIONS {
            evict_oldest(&mut sessions);
        }
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| PageSession::new(&self.settings, &self.validator));
        session.touch();
        f(session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

fn evict_oldest(sessions: &mut HashMap<String, PageSession>) {
    let oldest = sessions
        .iter()
        .min_by_key(|(_, s)| s.last_seen)
        .map(|(k, _)| k.clone());
    if let Some(key) = oldest {
        sessions.remove(&key);
    }
}
