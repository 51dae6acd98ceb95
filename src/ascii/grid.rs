//! Row-major pixel grids shared by every pipeline stage.

/// Number of channels in a decoded color grid (R, G, B).
pub const RGB_CHANNELS: usize = 3;

/// A 2-D grid of samples, row-major with the origin at the top-left.
///
/// Each cell holds `channels` consecutive samples. Stages never mutate a
/// grid they receive; they build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<T>,
}

impl<T: Copy> PixelGrid<T> {
    /// Wrap raw samples as a grid.
    ///
    /// Returns `None` when `data.len() != width * height * channels` or when
    /// `channels` is zero.
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<T>) -> Option<Self> {
        if channels == 0 || data.len() != width * height * channels {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A grid with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: T) -> Self {
        Self {
            width,
            height,
            channels: channels.max(1),
            data: vec![value; width * height * channels.max(1)],
        }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per cell.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw samples in row-major, channel-interleaved order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Sample `c` of the cell at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> T {
        self.data[(y * self.width + x) * self.channels + c]
    }

    /// Sample lookup with replicate border handling: out-of-range
    /// coordinates are clamped to the nearest in-bounds cell.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize, c: usize) -> T {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.get(x, y, c)
    }

    /// All samples of row `y`.
    pub fn row(&self, y: usize) -> &[T] {
        let stride = self.width * self.channels;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Apply `f` to every sample, keeping the layout.
    pub fn map<U, F>(&self, f: F) -> PixelGrid<U>
    where
        F: FnMut(T) -> U,
    {
        PixelGrid {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

/// Per-pixel Sobel gradient: two co-indexed single-channel grids.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    /// `sqrt(gx^2 + gy^2)`, non-negative.
    pub magnitude: PixelGrid<f32>,
    /// `atan2(gy, gx)` in radians, within `(-PI, PI]`.
    pub direction: PixelGrid<f32>,
}
