pub mod jpeg_still_encoder;
