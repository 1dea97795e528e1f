//! Dirty region tracking in pixel space.

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        PixelRect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

/// Bounding box of everything touched since it was last taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyRegion(Option<PixelRect>);

impl DirtyRegion {
    pub fn extend(&mut self, rect: PixelRect) {
        if rect.is_empty() {
            return;
        }
        self.0 = Some(match self.0 {
            Some(current) => current.union(&rect),
            None => rect,
        });
    }

    pub fn get(&self) -> Option<PixelRect> {
        self.0
    }

    /// Return the accumulated region and reset it to empty.
    pub fn take(&mut self) -> Option<PixelRect> {
        self.0.take()
    }
}
