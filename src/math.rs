use crate::{ArrangementNum, Point2};

/// Describes on which side of a directed line a point lies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineSideInfo {
    signed_side: f64,
}

impl LineSideInfo {
    #[inline]
    pub(crate) fn from_determinant(s: f64) -> LineSideInfo {
        LineSideInfo { signed_side: s }
    }

    /// Returns `true` if a point lies on the left side of a line.
    ///
    /// This method returns `false` if the point lies exactly on the line.
    pub(crate) fn is_on_left_side(&self) -> bool {
        self.signed_side > 0.0
    }

    /// Returns `true` if a point lies on the right side of a line.
    ///
    /// This method returns `false` if the point lies exactly on the line.
    pub(crate) fn is_on_right_side(&self) -> bool {
        self.signed_side < 0.0
    }

    /// Returns `true` if a point lies exactly on this line.
    #[inline]
    pub(crate) fn is_on_line(self) -> bool {
        self.signed_side.abs() == 0.0
    }

    /// Maps "left of the line" to `Greater` and "right of the line" to `Less`.
    ///
    /// For a line directed towards increasing x this is the result of comparing the
    /// query point's y coordinate with the line.
    pub(crate) fn as_ordering(self) -> std::cmp::Ordering {
        if self.is_on_left_side() {
            std::cmp::Ordering::Greater
        } else if self.is_on_right_side() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Equal
        }
    }
}

fn to_robust_coord<S: ArrangementNum>(point: Point2<S>) -> robust::Coord<S> {
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Exact orientation of `query_point` relative to the directed line `p1 -> p2`.
pub(crate) fn side_query<S>(p1: Point2<S>, p2: Point2<S>, query_point: Point2<S>) -> LineSideInfo
where
    S: ArrangementNum,
{
    let p1 = to_robust_coord(p1);
    let p2 = to_robust_coord(p2);
    let query_point = to_robust_coord(query_point);

    let result = robust::orient2d(p1, p2, query_point);
    LineSideInfo::from_determinant(result)
}

/// Sign of the cross product of two direction vectors.
///
/// `Greater` if `d2` is rotated counterclockwise relative to `d1`.
pub(crate) fn cross_sign<S: ArrangementNum>(d1: Point2<S>, d2: Point2<S>) -> std::cmp::Ordering {
    let origin = Point2::new(S::zero(), S::zero());
    side_query(origin, d1, d2).as_ordering()
}
