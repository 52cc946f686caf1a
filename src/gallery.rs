/// Image-gallery position that wraps at both ends.
#[derive(Debug, Clone, Copy)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Human-readable position, e.g. `2 / 3`.
    pub fn position(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}
