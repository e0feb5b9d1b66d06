//! Lifecycle control - per-actor view state and active-session transitions

use crate::session::{Session, SessionKind, VrAccessTier};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

/// What the acting participant is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    Dashboard,
    VrLauncher,
    WaitingRoom,
    VideoRoom,
    Feedback,
}

/// Acting role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Therapist,
    Patient,
}

/// A portal user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Lifecycle contract violations
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Invalid transition: {action} is not allowed from {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: ViewState,
    },

    #[error("No active session")]
    NoActiveSession,
}

/// Event emitted to the rendering layer after every transition
#[derive(Debug, Clone)]
pub enum LifecycleEvent {
    ViewChanged {
        view: ViewState,
        session: Option<Session>,
    },
}

/// Owns the view state and active session for one actor
///
/// All transitions go through the methods here; an invalid transition
/// returns an error and leaves the state untouched.
pub struct LifecycleController {
    role: Role,
    view: ViewState,
    active_session: Option<Session>,
    event_sender: mpsc::Sender<LifecycleEvent>,
}

impl LifecycleController {
    /// Create a controller at the dashboard with no active session
    pub fn new(role: Role, event_sender: mpsc::Sender<LifecycleEvent>) -> Self {
        Self {
            role,
            view: ViewState::Dashboard,
            active_session: None,
            event_sender,
        }
    }

    /// Current view state
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Acting role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Currently active session, if any
    pub fn active_session(&self) -> Option<&Session> {
        self.active_session.as_ref()
    }

    /// Join a session
    ///
    /// VR sessions route to the launcher. For everything else the patient
    /// enters the room directly while the operator passes through the
    /// waiting room to admit them.
    pub fn join_session(&mut self, session: Session) {
        self.view = if session.is_vr() {
            ViewState::VrLauncher
        } else if self.role == Role::Patient {
            ViewState::VideoRoom
        } else {
            ViewState::WaitingRoom
        };
        tracing::debug!("Joining session {}, view -> {:?}", session.id, self.view);
        self.active_session = Some(session);
        self.emit();
    }

    /// Attach the chosen access tier to the active VR session and enter the room
    pub fn launch_vr(&mut self, tier: VrAccessTier) -> Result<(), LifecycleError> {
        if self.view != ViewState::VrLauncher {
            return Err(LifecycleError::InvalidTransition {
                action: "launch_vr",
                state: self.view,
            });
        }
        let session = self
            .active_session
            .as_mut()
            .ok_or(LifecycleError::NoActiveSession)?;
        if let SessionKind::Vr { tier: slot, .. } = &mut session.kind {
            *slot = Some(tier);
        }
        self.view = ViewState::VideoRoom;
        self.emit();
        Ok(())
    }

    /// Admit the remote participant from the waiting room
    pub fn admit(&mut self) -> Result<(), LifecycleError> {
        if self.view != ViewState::WaitingRoom {
            return Err(LifecycleError::InvalidTransition {
                action: "admit",
                state: self.view,
            });
        }
        self.view = ViewState::VideoRoom;
        self.emit();
        Ok(())
    }

    /// Leave the room and move to the feedback screen
    pub fn leave(&mut self) -> Result<(), LifecycleError> {
        if self.view != ViewState::VideoRoom {
            return Err(LifecycleError::InvalidTransition {
                action: "leave",
                state: self.view,
            });
        }
        self.view = ViewState::Feedback;
        self.emit();
        Ok(())
    }

    /// Dismiss the feedback screen and return to the dashboard
    pub fn acknowledge_feedback(&mut self) -> Result<(), LifecycleError> {
        if self.view != ViewState::Feedback {
            return Err(LifecycleError::InvalidTransition {
                action: "acknowledge_feedback",
                state: self.view,
            });
        }
        self.view = ViewState::Dashboard;
        self.active_session = None;
        self.emit();
        Ok(())
    }

    /// Switch the acting role: a hard reset to the dashboard from any state
    pub fn switch_role(&mut self, role: Role) {
        tracing::debug!("Switching role to {:?}", role);
        self.role = role;
        self.view = ViewState::Dashboard;
        self.active_session = None;
        self.emit();
    }

    fn emit(&self) {
        let _ = self.event_sender.try_send(LifecycleEvent::ViewChanged {
            view: self.view,
            session: self.active_session.clone(),
        });
    }
}
