pub mod constants;
pub mod face_bounds;
pub mod frame;
