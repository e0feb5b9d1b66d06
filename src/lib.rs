//! manas - A telehealth session scheduling and live-countdown tiering engine
//!
//! This crate provides the core functionality for the manas portal, including:
//! - Session registry (creation, validation, yield projection)
//! - Per-actor lifecycle control (dashboard through feedback)
//! - Live countdown tier classification and join handling
//!
//! # Architecture
//!
//! manas separates the time-dependent core from presentation:
//! - The library owns session state, view transitions and countdown tiers
//! - Rendering layers consume `LifecycleEvent` and `CountdownEvent` streams
//! - Static catalogs (group themes, VR environments, CBT modules) are
//!   read-only reference data looked up by slug or id

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod lifecycle;
pub mod session;
