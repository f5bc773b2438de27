pub mod card;
pub mod face_overlay;
pub mod modal;
pub mod primary_button;
