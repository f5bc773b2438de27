use ndarray::{ArrayView3, ArrayViewMut3};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height}x3")]
pub struct FrameSizeError {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

/// One captured camera frame: contiguous RGB bytes in row-major order.
///
/// `sequence` counts frames produced by the owning stream, starting at 0.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    sequence: u64,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    pub fn new(data: Vec<u8>, width: u32, height: u32, sequence: u64) -> Result<Self, FrameSizeError> {
        let expected = (width as usize) * (height as usize) * Self::CHANNELS;
        if data.len() != expected {
            return Err(FrameSizeError {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            sequence,
        })
    }

    /// A black frame of the given size.
    #[cfg(test)]
    pub fn blank(width: u32, height: u32, sequence: u64) -> Self {
        Self {
            data: vec![0u8; (width as usize) * (height as usize) * Self::CHANNELS],
            width,
            height,
            sequence,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Expands to RGBA with an opaque alpha channel, the layout GPU image
    /// handles expect.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.data.len() / Self::CHANNELS * 4);
        for px in self.data.chunks_exact(Self::CHANNELS) {
            rgba.extend_from_slice(px);
            rgba.push(u8::MAX);
        }
        rgba
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("length is validated at construction")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        let shape = self.shape();
        ArrayViewMut3::from_shape(shape, &mut self.data)
            .expect("length is validated at construction")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, Self::CHANNELS)
    }
}
