/// Per-pixel 8-bit opacity raster, row-major, the size of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// A fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap alpha values produced by a host rasterizer.
    /// Returns `None` if the buffer does not match the dimensions.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, alpha })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at (x, y), or `None` outside the surface.
    pub fn alpha(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        self.alpha.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn set_alpha(&mut self, x: u32, y: u32, alpha: u8) {
        if x < self.width && y < self.height {
            self.alpha[y as usize * self.width as usize + x as usize] = alpha;
        }
    }

    /// Clip to at most `width` x `height`, keeping the top-left corner.
    pub fn cropped(self, width: u32, height: u32) -> Self {
        if width >= self.width && height >= self.height {
            return self;
        }
        let w = width.min(self.width);
        let h = height.min(self.height);
        let stride = self.width as usize;
        let alpha = self
            .alpha
            .chunks_exact(stride.max(1))
            .take(h as usize)
            .flat_map(|row| row[..w as usize].iter().copied())
            .collect();
        Self { width: w, height: h, alpha }
    }

    /// Number of pixels with non-zero alpha.
    pub fn opaque_pixels(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }
}
