pub mod detected_face;
pub mod recognition_session;
pub mod recognition_status;
