//! Rectangle type for render windows and buffer bounds.
//!
//! Hosts hand out pixel rectangles whose origin is not anchored at (0, 0):
//! a buffer may start at negative coordinates and a render window may cover
//! only part of it. [`Rect`] therefore uses a signed origin.
//!
//! # Coordinate System
//!
//! - The lower bound is **inclusive**, the upper bound is **exclusive**
//! - X increases to the right, Y increases row by row
//!
//! ```text
//! (x, y) ───────────► right() (exclusive)
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//! bottom() (exclusive)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use splittone_core::Rect;
//!
//! let window = Rect::from_corners(-8, -8, 120, 64);
//! assert_eq!(window.width, 128);
//! assert!(window.contains(-8, 0));
//! assert!(!window.contains(120, 0));
//!
//! // Split into row bands for tiled processing
//! let tiles = window.row_bands(16);
//! assert_eq!(tiles.len(), 5);
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Invariants
///
/// - A rectangle with zero width or height is empty
/// - `right()` and `bottom()` saturate at `i32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// ```rust
    /// use splittone_core::Rect;
    ///
    /// let rect = Rect::from_size(1920, 1080);
    /// assert_eq!((rect.x, rect.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from two corners `(x1, y1)` inclusive and
    /// `(x2, y2)` exclusive.
    ///
    /// Swapped coordinates are normalized.
    ///
    /// ```rust
    /// use splittone_core::Rect;
    ///
    /// let rect = Rect::from_corners(10, 20, -90, 70);
    /// assert_eq!(rect, Rect::new(-90, 20, 100, 50));
    /// ```
    #[inline]
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(
            min_x,
            min_y,
            (max_x as i64 - min_x as i64) as u32,
            (max_y as i64 - min_y as i64) as u32,
        )
    }

    /// X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        saturate(self.x as i64 + self.width as i64)
    }

    /// Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        saturate(self.y as i64 + self.height as i64)
    }

    /// Area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// ```rust
    /// use splittone_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the intersection with another rectangle, or `None` if they
    /// share no pixel.
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::from_corners(x, y, right, bottom))
        } else {
            None
        }
    }

    /// Iterates all (x, y) coordinates, row by row.
    ///
    /// ```rust
    /// use splittone_core::Rect;
    ///
    /// let coords: Vec<_> = Rect::new(-1, 0, 2, 2).iter_coords().collect();
    /// assert_eq!(coords, vec![(-1, 0), (0, 0), (-1, 1), (0, 1)]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }

    /// Splits the rectangle into horizontal bands of at most `rows` rows.
    ///
    /// The bands are disjoint and cover the rectangle exactly. An empty
    /// rectangle yields no bands; `rows == 0` is treated as 1.
    pub fn row_bands(&self, rows: u32) -> Vec<Rect> {
        if self.is_empty() {
            return Vec::new();
        }
        let rows = rows.max(1);
        let mut bands = Vec::with_capacity(self.height.div_ceil(rows) as usize);
        let mut offset = 0u32;
        while offset < self.height {
            let h = rows.min(self.height - offset);
            bands.push(Rect::new(self.x, self.y + offset as i32, self.width, h));
            offset += h;
        }
        bands
    }
}

const fn saturate(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else {
        v as i32
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{} - {},{}]",
            self.x,
            self.y,
            self.right(),
            self.bottom()
        )
    }
}
