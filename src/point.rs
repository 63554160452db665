use num_traits::{Num, Signed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A coordinate type that can be used with the bundled geometry traits.
///
/// Orientation predicates are evaluated exactly after converting the type into a `f64`.
///
/// This type should usually be either `f32` or `f64`.
pub trait ArrangementNum:
    Num + PartialOrd + Into<f64> + From<f32> + Copy + Signed + std::fmt::Debug
{
}

impl<T> ArrangementNum for T where
    T: Num + PartialOrd + Into<f64> + From<f32> + Copy + Signed + std::fmt::Debug
{
}

/// A two dimensional point.
///
/// This is the point type used by [SegmentTraits](crate::SegmentTraits) and
/// [LinearTraits](crate::LinearTraits).
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: ArrangementNum> Point2<S> {
    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Compares two points lexicographically, first by x and then by y.
    pub(crate) fn cmp_xy(&self, other: &Self) -> std::cmp::Ordering {
        cmp_num(self.x, other.x).then_with(|| cmp_num(self.y, other.y))
    }
}

/// Total order on coordinates. NaN values compare equal to everything and are
/// never produced by valid input.
#[inline]
pub(crate) fn cmp_num<S: PartialOrd>(lhs: S, rhs: S) -> std::cmp::Ordering {
    lhs.partial_cmp(&rhs).unwrap_or(std::cmp::Ordering::Equal)
}
