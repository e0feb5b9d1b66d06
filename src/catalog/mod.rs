//! Static catalogs - group themes, VR environments, CBT modules
//!
//! Read-only reference data consumed by the scheduling form and the patient
//! portal. The core only looks entries up by slug or id and never mutates
//! them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A drop-in group room theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTheme {
    /// URL-safe identifier
    pub slug: String,

    /// Display name
    pub name: String,

    /// Display emoji
    pub emoji: String,

    /// Social-proof line shown on the room card
    pub social_proof_stat: String,

    /// Icon accompanying the social-proof line
    pub social_proof_icon: String,
}

/// An immersive VR environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrEnvironment {
    /// Catalog identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display icon
    pub icon: String,

    /// Preview image URL
    pub thumbnail: String,

    /// Therapy approach this environment supports
    pub therapy_type: String,

    /// Conditions this environment targets
    pub target_conditions: Vec<String>,
}

/// An interactive CBT module runnable inside a VR session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbtModule {
    /// Catalog identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display icon
    pub icon: String,

    /// One-line description
    pub description: String,
}

fn theme(slug: &str, name: &str, emoji: &str, stat: &str, icon: &str) -> GroupTheme {
    GroupTheme {
        slug: slug.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        social_proof_stat: stat.to_string(),
        social_proof_icon: icon.to_string(),
    }
}

/// Drop-in group themes, most popular first
pub static GROUP_THEMES: Lazy<Vec<GroupTheme>> = Lazy::new(|| {
    vec![
        theme(
            "student-stress",
            "Student Stress",
            "🎓",
            "78% found new direction within 3 months",
            "💚",
        ),
        theme(
            "anxiety-circle",
            "Anxiety Circle",
            "🌊",
            "2,400+ members breathe easier every week",
            "🫁",
        ),
        theme(
            "grief-support",
            "Grief Support",
            "🕊️",
            "Moderated by certified grief counsellors",
            "🤝",
        ),
        theme(
            "sleep-reset",
            "Sleep Reset",
            "🌙",
            "Avg. 52 extra minutes of sleep after 4 weeks",
            "😴",
        ),
        theme(
            "burnout-recovery",
            "Burnout Recovery",
            "🔥",
            "9 in 10 report lower exhaustion scores",
            "🌱",
        ),
        theme(
            "relationship-repair",
            "Relationship Repair",
            "💞",
            "Couples report 65% fewer escalations",
            "🗣️",
        ),
    ]
});

fn environment(
    id: &str,
    name: &str,
    icon: &str,
    therapy_type: &str,
    target_conditions: &[&str],
) -> VrEnvironment {
    VrEnvironment {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        thumbnail: format!("https://picsum.photos/seed/{}/640/360", id),
        therapy_type: therapy_type.to_string(),
        target_conditions: target_conditions.iter().map(|c| c.to_string()).collect(),
    }
}

/// Pre-built immersive environments
pub static VR_ENVIRONMENTS: Lazy<Vec<VrEnvironment>> = Lazy::new(|| {
    vec![
        environment(
            "therapy_forest",
            "Therapy Forest",
            "🌲",
            "Grounding",
            &["Anxiety", "Stress"],
        ),
        environment(
            "calm_beach",
            "Calm Beach",
            "🏖️",
            "Relaxation",
            &["Panic", "Stress"],
        ),
        environment(
            "mountain_summit",
            "Mountain Summit",
            "🏔️",
            "Exposure",
            &["Acrophobia"],
        ),
        environment(
            "city_commute",
            "City Commute",
            "🚇",
            "Exposure",
            &["Social Anxiety", "Agoraphobia"],
        ),
        environment(
            "quiet_library",
            "Quiet Library",
            "📚",
            "Focus",
            &["Overthinking", "Exam Stress"],
        ),
        environment(
            "aurora_dome",
            "Aurora Dome",
            "🌌",
            "Mindfulness",
            &["Insomnia", "Rumination"],
        ),
    ]
});

fn module(id: &str, name: &str, icon: &str, description: &str) -> CbtModule {
    CbtModule {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

/// Interactive CBT modules available inside VR sessions
pub static VR_MODULES: Lazy<Vec<CbtModule>> = Lazy::new(|| {
    vec![
        module(
            "thought_record",
            "Thought Record",
            "📝",
            "Capture and examine thoughts as floating 3D cards",
        ),
        module(
            "grounding",
            "Grounding",
            "🧘",
            "5-4-3-2-1 sensory grounding inside the environment",
        ),
        module(
            "exposure",
            "Exposure",
            "🎯",
            "Graded real-world exposure simulations",
        ),
        module(
            "breathing",
            "Breathing",
            "🌬️",
            "Paced breathing guided by the environment's rhythm",
        ),
        module(
            "reframing",
            "Reframing",
            "🔄",
            "Rewrite captured thoughts into balanced alternatives",
        ),
    ]
});

/// Look up a group theme by slug
pub fn theme_by_slug(slug: &str) -> Option<&'static GroupTheme> {
    GROUP_THEMES.iter().find(|t| t.slug == slug)
}

/// Look up a VR environment by id
pub fn environment_by_id(id: &str) -> Option<&'static VrEnvironment> {
    VR_ENVIRONMENTS.iter().find(|e| e.id == id)
}

/// Look up a CBT module by id
pub fn module_by_id(id: &str) -> Option<&'static CbtModule> {
    VR_MODULES.iter().find(|m| m.id == id)
}
