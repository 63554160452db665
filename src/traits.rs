use std::cmp::Ordering;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes where a curve end or a vertex lies relative to one axis of the parameter space.
///
/// Finite points always report [BoundaryType::NoBoundary] for both axes. An unbounded end of
/// a non-vertical curve reports `MinusInfinity` or `PlusInfinity` along x; an unbounded end of
/// a vertical curve reports it along y.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum BoundaryType {
    /// The coordinate approaches negative infinity.
    MinusInfinity,
    /// The coordinate is finite.
    NoBoundary,
    /// The coordinate approaches positive infinity.
    PlusInfinity,
}

impl BoundaryType {
    /// Returns `true` unless this is [BoundaryType::NoBoundary].
    #[inline]
    pub fn is_infinite(self) -> bool {
        self != BoundaryType::NoBoundary
    }
}

/// Selects one of the two ends of an x-monotone curve.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum CurveEnd {
    /// The lexicographically smaller end (the left end, or the bottom end of a vertical curve).
    Min,
    /// The lexicographically larger end.
    Max,
}

impl CurveEnd {
    /// Returns the other end.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            CurveEnd::Min => CurveEnd::Max,
            CurveEnd::Max => CurveEnd::Min,
        }
    }
}

/// Direction of a halfedge relative to the lexicographic order of its end vertices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub enum HalfedgeDirection {
    /// The source vertex is lexicographically smaller than the target vertex.
    LeftToRight,
    /// The source vertex is lexicographically larger than the target vertex.
    RightToLeft,
}

impl HalfedgeDirection {
    /// Returns the direction of the twin halfedge.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            HalfedgeDirection::LeftToRight => HalfedgeDirection::RightToLeft,
            HalfedgeDirection::RightToLeft => HalfedgeDirection::LeftToRight,
        }
    }
}

/// Marker trait for [Bounded] and [Unbounded].
///
/// The arrangement branches on `SUPPORTS_UNBOUNDED` whenever a comparison may involve
/// an element at infinity. The constant is known at compile time, the unused branch is
/// never evaluated.
///
/// There should be no need to implement this.
pub trait BoundaryCategory: Clone + Copy + Debug + Default {
    /// `true` if curves of the traits may reach infinity.
    const SUPPORTS_UNBOUNDED: bool;
}

/// Category of traits whose curves are all bounded.
///
/// The four fictitious corners are the only vertices at infinity. They compare as smaller or
/// larger than every finite point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Bounded;

/// Category of traits whose curves may be unbounded.
///
/// Comparisons against curve ends at infinity are delegated to the boundary aware
/// predicates of [ArrangementTraits].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Unbounded;

impl BoundaryCategory for Bounded {
    const SUPPORTS_UNBOUNDED: bool = false;
}

impl BoundaryCategory for Unbounded {
    const SUPPORTS_UNBOUNDED: bool = true;
}

/// The geometric predicates an [Arrangement](crate::Arrangement) consumes.
///
/// All curves handed to an arrangement must be *x-monotone* and interior disjoint from
/// each other. The arrangement never constructs intersections; it only orders points and
/// curves with the predicates below. Every predicate must be deterministic and consistent
/// (a strict weak ordering where an ordering is returned).
///
/// The boundary aware predicates at the end of this trait have defaults suitable for
/// [Bounded] traits, where they are never consulted.
pub trait ArrangementTraits {
    /// The point type.
    type Point: Clone + Debug;
    /// The x-monotone curve type.
    type Curve: Clone + Debug;
    /// Either [Bounded] or [Unbounded].
    type Category: BoundaryCategory;

    /// Compares the x coordinates of two points.
    fn compare_x(&self, p1: &Self::Point, p2: &Self::Point) -> Ordering;

    /// Compares two points lexicographically, first by x and then by y.
    fn compare_xy(&self, p1: &Self::Point, p2: &Self::Point) -> Ordering;

    /// Returns the lexicographically smaller endpoint of a curve.
    ///
    /// Must only be called if that end is bounded.
    fn construct_min_vertex(&self, cv: &Self::Curve) -> Self::Point;

    /// Returns the lexicographically larger endpoint of a curve.
    ///
    /// Must only be called if that end is bounded.
    fn construct_max_vertex(&self, cv: &Self::Curve) -> Self::Point;

    /// Returns `true` if the curve is a vertical segment, ray or line.
    fn is_vertical(&self, cv: &Self::Curve) -> bool;

    /// Compares the y coordinate of `p` with the y coordinate of `cv` at the x coordinate of `p`.
    ///
    /// `p` must lie in the x-range of `cv`. For a vertical curve the result is `Equal` if `p`
    /// lies on the curve and `Less` or `Greater` if it lies below or above it.
    fn compare_y_at_x(&self, p: &Self::Point, cv: &Self::Curve) -> Ordering;

    /// Compares two curves immediately to the left of a point both of them contain.
    ///
    /// Both curves must be defined to the left of `p`. A vertical curve is considered to be
    /// below every non-vertical curve.
    fn compare_y_at_x_left(&self, cv1: &Self::Curve, cv2: &Self::Curve, p: &Self::Point)
        -> Ordering;

    /// Compares two curves immediately to the right of a point both of them contain.
    ///
    /// Both curves must be defined to the right of `p`. A vertical curve emanating upwards
    /// from `p` is considered to be above every non-vertical curve.
    fn compare_y_at_x_right(
        &self,
        cv1: &Self::Curve,
        cv2: &Self::Curve,
        p: &Self::Point,
    ) -> Ordering;

    /// Returns `true` if both points are geometrically equal.
    fn equal_points(&self, p1: &Self::Point, p2: &Self::Point) -> bool {
        self.compare_xy(p1, p2) == Ordering::Equal
    }

    /// Returns `true` if both curves are geometrically equal.
    fn equal_curves(&self, cv1: &Self::Curve, cv2: &Self::Curve) -> bool;

    /// Returns where a curve end lies along the x axis of the parameter space.
    fn parameter_space_in_x(&self, _cv: &Self::Curve, _end: CurveEnd) -> BoundaryType {
        BoundaryType::NoBoundary
    }

    /// Returns where a curve end lies along the y axis of the parameter space.
    fn parameter_space_in_y(&self, _cv: &Self::Curve, _end: CurveEnd) -> BoundaryType {
        BoundaryType::NoBoundary
    }

    /// Compares the x coordinate of `p` with the limit x coordinate of a curve end that
    /// lies at y = ±∞.
    fn compare_x_on_boundary(&self, _p: &Self::Point, _cv: &Self::Curve, _end: CurveEnd) -> Ordering {
        Ordering::Equal
    }

    /// Compares the limit x coordinates of two curve ends at y = ±∞.
    fn compare_x_curve_ends_on_boundary(
        &self,
        _cv1: &Self::Curve,
        _end1: CurveEnd,
        _cv2: &Self::Curve,
        _end2: CurveEnd,
    ) -> Ordering {
        Ordering::Equal
    }

    /// Compares the y order of two curve ends that both lie at x = -∞ (for `CurveEnd::Min`)
    /// or both at x = +∞ (for `CurveEnd::Max`).
    fn compare_y_near_boundary(
        &self,
        _cv1: &Self::Curve,
        _cv2: &Self::Curve,
        _end: CurveEnd,
    ) -> Ordering {
        Ordering::Equal
    }

    /// Returns `true` if the given curve end is bounded.
    fn is_bounded_end(&self, cv: &Self::Curve, end: CurveEnd) -> bool {
        !self.parameter_space_in_x(cv, end).is_infinite()
            && !self.parameter_space_in_y(cv, end).is_infinite()
    }
}
