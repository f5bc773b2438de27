pub mod camera_slot;
pub mod camera_source;
