//! Session domain - the central entity, creation descriptors, validation

mod earnings;
mod registry;

pub use earnings::YieldReport;
pub use registry::SessionRegistry;

use crate::catalog::{GroupTheme, VrEnvironment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Seat capacity of a drop-in group room
pub const GROUP_CAPACITY: u32 = 15;

/// Modules planned for a quick-launched VR session
const QUICK_VR_MODULES: [&str; 3] = ["thought_record", "exposure", "grounding"];

/// Errors for malformed session descriptors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must be positive (got {0} minutes)")]
    NonPositiveDuration(u32),

    #[error("A patient name is required for {kind} sessions")]
    MissingPatientName { kind: &'static str },

    #[error("A group theme is required for group sessions")]
    MissingTheme,

    #[error("A VR environment is required for VR sessions")]
    MissingEnvironment,
}

/// Session status over its scheduled life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

/// Access tier selected when launching a VR session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VrAccessTier {
    Standard,
    Immersive,
    Clinical,
}

/// Session type requested on the scheduling form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Individual,
    Group,
    Vr,
}

impl SessionType {
    fn label(&self) -> &'static str {
        match self {
            SessionType::Individual => "individual",
            SessionType::Group => "group",
            SessionType::Vr => "VR",
        }
    }
}

/// Kind-specific session payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionKind {
    /// One-on-one video consultation
    Individual { patient_name: String },

    /// Capacity-bounded drop-in room
    Group {
        theme: GroupTheme,
        current_participants: u32,
        max_participants: u32,
    },

    /// Immersive CBT session; the access tier is attached at launch
    Vr {
        environment: VrEnvironment,
        patient_name: String,
        tier: Option<VrAccessTier>,
        modules_planned: Vec<String>,
    },
}

/// Partial descriptor for creating a new session
///
/// Mirrors the scheduling form: a type selector plus the fields that type
/// needs. Validation happens in [`Session::from_descriptor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Requested session type
    pub session_type: SessionType,

    /// Scheduled start
    pub start_time: DateTime<Utc>,

    /// Planned length in minutes
    pub duration_minutes: u32,

    /// Patient display name (individual and VR sessions)
    pub patient_name: Option<String>,

    /// Group theme (group sessions)
    pub theme: Option<GroupTheme>,

    /// Immersive environment (VR sessions)
    pub environment: Option<VrEnvironment>,

    /// Planned CBT module ids (VR sessions)
    pub modules_planned: Vec<String>,

    /// Free-form operator notes
    pub notes: Option<String>,
}

impl SessionDescriptor {
    pub fn new(session_type: SessionType, start_time: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            session_type,
            start_time,
            duration_minutes,
            patient_name: None,
            theme: None,
            environment: None,
            modules_planned: Vec::new(),
            notes: None,
        }
    }

    pub fn with_patient(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    pub fn with_theme(mut self, theme: GroupTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_environment(mut self, environment: VrEnvironment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_modules(mut self, modules: Vec<String>) -> Self {
        self.modules_planned = modules;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A scheduled or live therapy session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: Uuid,

    /// Operating therapist or moderator display name
    pub therapist_name: String,

    /// Scheduled start
    pub start_time: DateTime<Utc>,

    /// Planned length in minutes
    pub duration_minutes: u32,

    /// Current status
    pub status: SessionStatus,

    /// Every session built here is end-to-end encrypted
    pub is_encrypted: bool,

    /// Kind-specific payload
    pub kind: SessionKind,

    /// Free-form operator notes
    pub notes: Option<String>,
}

impl Session {
    /// Validate a descriptor and build a fully-formed scheduled session
    pub fn from_descriptor(
        descriptor: SessionDescriptor,
        therapist_name: &str,
    ) -> Result<Self, ValidationError> {
        if descriptor.duration_minutes == 0 {
            return Err(ValidationError::NonPositiveDuration(
                descriptor.duration_minutes,
            ));
        }

        let kind = match descriptor.session_type {
            SessionType::Individual => SessionKind::Individual {
                patient_name: required_name(descriptor.patient_name, SessionType::Individual)?,
            },
            SessionType::Group => {
                let theme = descriptor.theme.ok_or(ValidationError::MissingTheme)?;
                SessionKind::Group {
                    theme,
                    current_participants: 1,
                    max_participants: GROUP_CAPACITY,
                }
            }
            SessionType::Vr => {
                let environment = descriptor
                    .environment
                    .ok_or(ValidationError::MissingEnvironment)?;
                SessionKind::Vr {
                    environment,
                    patient_name: required_name(descriptor.patient_name, SessionType::Vr)?,
                    tier: None,
                    modules_planned: descriptor.modules_planned,
                }
            }
        };

        Ok(Self {
            id: Uuid::new_v4(),
            therapist_name: therapist_name.to_string(),
            start_time: descriptor.start_time,
            duration_minutes: descriptor.duration_minutes,
            status: SessionStatus::Scheduled,
            is_encrypted: true,
            kind,
            notes: descriptor.notes,
        })
    }

    /// Synthesize a live drop-in group session for a themed room
    pub fn drop_in(theme: GroupTheme, participants: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            therapist_name: "Certified Moderator".to_string(),
            start_time: now,
            duration_minutes: 90,
            status: SessionStatus::Live,
            is_encrypted: true,
            kind: SessionKind::Group {
                theme,
                current_participants: participants.min(GROUP_CAPACITY),
                max_participants: GROUP_CAPACITY,
            },
            notes: None,
        }
    }

    /// Synthesize a live quick-launch VR session for an environment
    pub fn quick_vr(environment: VrEnvironment, therapist_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            therapist_name: therapist_name.to_string(),
            start_time: now,
            duration_minutes: 45,
            status: SessionStatus::Live,
            is_encrypted: true,
            kind: SessionKind::Vr {
                environment,
                patient_name: "Anonymous User".to_string(),
                tier: None,
                modules_planned: QUICK_VR_MODULES.iter().map(|m| m.to_string()).collect(),
            },
            notes: None,
        }
    }

    /// Whether this is a VR session (takes precedence over group in routing)
    pub fn is_vr(&self) -> bool {
        matches!(self.kind, SessionKind::Vr { .. })
    }

    /// Whether this is a drop-in group session
    pub fn is_group(&self) -> bool {
        matches!(self.kind, SessionKind::Group { .. })
    }

    /// Patient display name, if this session has one
    pub fn patient_name(&self) -> Option<&str> {
        match &self.kind {
            SessionKind::Individual { patient_name } => Some(patient_name),
            SessionKind::Vr { patient_name, .. } => Some(patient_name),
            SessionKind::Group { .. } => None,
        }
    }
}

fn required_name(
    name: Option<String>,
    session_type: SessionType,
) -> Result<String, ValidationError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        _ => Err(ValidationError::MissingPatientName {
            kind: session_type.label(),
        }),
    }
}
