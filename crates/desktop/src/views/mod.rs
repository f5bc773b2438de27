pub mod camera_view;
pub mod control_panel;
pub mod recognition_status;
pub mod registration_modal;
pub mod results_panel;
pub mod settings_modal;
