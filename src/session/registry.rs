//! Session registry - owns every session for the lifetime of the process

use super::earnings::{self, YieldReport};
use super::{Session, SessionDescriptor, ValidationError};
use crate::config::PricingConfig;
use uuid::Uuid;

/// In-memory session registry, kept sorted ascending by start time
///
/// All inserts go through [`SessionRegistry::insert`]; renderers depend on
/// the sort order for "next session" displays. There is no deletion path.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Validate a descriptor and insert the resulting scheduled session
    ///
    /// On validation failure the registry is left unchanged.
    pub fn create_session(
        &mut self,
        descriptor: SessionDescriptor,
        therapist_name: &str,
    ) -> Result<Session, ValidationError> {
        let session = Session::from_descriptor(descriptor, therapist_name)?;
        tracing::info!(
            "Created session {} starting {}",
            session.id,
            session.start_time
        );
        self.insert(session.clone());
        Ok(session)
    }

    /// Insert an already-built session (drop-in and quick-VR paths)
    pub fn insert(&mut self, session: Session) {
        self.sessions.push(session);
        self.sessions.sort_by_key(|s| s.start_time);
    }

    /// All sessions, ascending by start time
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Find a session by id
    pub fn find(&self, id: Uuid) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Drop-in group sessions, in start-time order
    pub fn group_sessions(&self) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.is_group()).collect()
    }

    /// Individual and VR consultations, in start-time order
    pub fn consultations(&self) -> Vec<&Session> {
        self.sessions.iter().filter(|s| !s.is_group()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Project bookable revenue over the whole registry
    pub fn yield_report(&self, pricing: &PricingConfig) -> YieldReport {
        earnings::project(&self.sessions, pricing)
    }
}
