pub mod random_detector;
