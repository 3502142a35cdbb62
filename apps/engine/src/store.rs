//! ProfileStore — injected cache seam for built candidate profiles.
//!
//! The engine itself holds no cross-request state; callers that want to
//! reuse a profile across matching runs inject a store. The in-memory
//! implementation here evicts by TTL and is the reference for external
//! backends (Redis, a database table).

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::models::CandidateProfile;

pub trait ProfileStore: Send + Sync {
    fn get(&self, id: &str) -> Option<CandidateProfile>;
    fn put(&self, id: &str, profile: CandidateProfile);
}

pub struct InMemoryProfileStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, (DateTime<Utc>, CandidateProfile)>>,
}

impl InMemoryProfileStore {
    pub fn new(ttl_minutes: i64) -> Self {
        InMemoryProfileStore {
            ttl: Duration::minutes(ttl_minutes),
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, id: &str) -> Option<CandidateProfile> {
        let mut entries = self.entries.lock().expect("profile store lock poisoned");
        match entries.get(id) {
            Some((stored_at, profile)) if Utc::now() - *stored_at < self.ttl => {
                Some(profile.clone())
            }
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    fn put(&self, id: &str, profile: CandidateProfile) {
        let now = Utc::now();
        let mut entries = self.entries.lock().expect("profile store lock poisoned");
        // Opportunistic sweep so abandoned keys do not accumulate.
        entries.retain(|_, (stored_at, _)| now - *stored_at < self.ttl);
        entries.insert(id.to_string(), (now, profile));
    }
}
