use super::traits::ImageView;

/// Borrowed 8-bit grayscale view with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// View over tightly packed rows; `None` when `data` is too short.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Option<Self> {
        (data.len() >= w.checked_mul(h)?).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Sub-view of columns `x0..x1` and rows `y0..y1` sharing this buffer.
    ///
    /// Bounds are clamped to the view; `None` when nothing is left.
    pub fn window(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Option<ImageU8<'a>> {
        let (x1, y1) = (x1.min(self.w), y1.min(self.h));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        let start = y0 * self.stride + x0;
        Some(ImageU8 {
            w: x1 - x0,
            h: y1 - y0,
            stride: self.stride,
            data: &self.data[start..],
        })
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
