pub mod face_registry;
pub mod registration_wizard;
pub mod still_encoder;
