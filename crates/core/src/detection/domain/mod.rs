pub mod recognition_detector;
