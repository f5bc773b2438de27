pub mod scan_timer;
