//! Cell geometry for spatial navigation

/// Bounding rectangle of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Source of the rectangles of the currently interactive cells
///
/// Rectangles are returned in reading order, in one coordinate space, as
/// they are at the moment of the call. A renderer implements this over its
/// layout engine; tests supply fixed rectangles.
pub trait GeometryProvider {
    fn interactive_rects(&self) -> Vec<Rect>;
}

impl GeometryProvider for Vec<Rect> {
    fn interactive_rects(&self) -> Vec<Rect> {
        self.clone()
    }
}

impl GeometryProvider for [Rect] {
    fn interactive_rects(&self) -> Vec<Rect> {
        self.to_vec()
    }
}

impl<P: GeometryProvider + ?Sized> GeometryProvider for &P {
    fn interactive_rects(&self) -> Vec<Rect> {
        (**self).interactive_rects()
    }
}
