//! Core state and lifecycle logic for the multi-face recognition console.
//!
//! Each bounded context splits into `domain` (types and traits) and
//! `infrastructure` (concrete implementations). The desktop crate owns one
//! instance of each stateful component and drives them from UI events.

pub mod camera;
pub mod detection;
pub mod recognition;
pub mod registration;
pub mod settings;
pub mod shared;
