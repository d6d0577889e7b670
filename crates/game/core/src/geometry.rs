//! Arena geometry: integer points and directed segments.
//!
//! The arena uses integer pixel coordinates. Distances are Euclidean and
//! returned as `f64`; anything that produces a new point truncates toward
//! zero, matching how the judge interprets move targets.

use std::fmt;

/// Integer arena coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Point halfway between `self` and `other`, truncated toward zero.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Mean of a set of points, truncated toward zero.
    ///
    /// Returns `None` for an empty set.
    pub fn centroid<I>(points: I) -> Option<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let (count, sum_x, sum_y) = points
            .into_iter()
            .fold((0i64, 0i64, 0i64), |(n, sx, sy), p| {
                (n + 1, sx + i64::from(p.x), sy + i64::from(p.y))
            });

        if count == 0 {
            return None;
        }

        Some(Point::new((sum_x / count) as i32, (sum_y / count) as i32))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A direction anchored at a location: `origin` pointing toward `target`.
///
/// Treated as a value; the only in-place mutation is [`Segment::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub origin: Point,
    pub target: Point,
}

impl Segment {
    pub const fn new(origin: Point, target: Point) -> Self {
        Self { origin, target }
    }

    /// Shifts the old target into the origin and points at `next`.
    pub fn advance(&mut self, next: Point) {
        self.origin = self.target;
        self.target = next;
    }

    /// Same endpoints, swapped.
    pub fn reversed(self) -> Segment {
        Segment::new(self.target, self.origin)
    }

    /// Same origin, target reflected through the origin.
    ///
    /// Used to turn "toward the threat" into "away from the threat".
    pub fn opposite(self) -> Segment {
        let reflected = Point::new(
            self.origin.x + (self.origin.x - self.target.x),
            self.origin.y + (self.origin.y - self.target.y),
        );
        Segment::new(self.origin, reflected)
    }

    /// Rotates the target about the origin by `angle` radians (counter-clockwise).
    pub fn rotated(self, angle: f64) -> Segment {
        let (sin, cos) = angle.sin_cos();
        let (dx, dy) = self.delta();
        let dx = f64::from(dx);
        let dy = f64::from(dy);

        let x = (cos * dx - sin * dy + f64::from(self.origin.x)) as i32;
        let y = (sin * dx + cos * dy + f64::from(self.origin.y)) as i32;

        Segment::new(self.origin, Point::new(x, y))
    }

    /// Signed angle in radians from `self` to `other`, in `(-π, π]`.
    pub fn angle_between(self, other: Segment) -> f64 {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        let dot = f64::from(ax) * f64::from(bx) + f64::from(ay) * f64::from(by);
        let det = f64::from(ax) * f64::from(by) - f64::from(ay) * f64::from(bx);
        det.atan2(dot)
    }

    fn delta(self) -> (i32, i32) {
        (self.target.x - self.origin.x, self.target.y - self.origin.y)
    }
}
