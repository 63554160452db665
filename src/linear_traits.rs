use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::math::{cross_sign, side_query};
use crate::point::cmp_num;
use crate::{ArrangementNum, ArrangementTraits, BoundaryType, CurveEnd, Point2, Unbounded};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
enum LinearKind {
    Segment,
    Ray,
    Line,
}

/// A segment, ray or line.
///
/// Internally, every linear curve stores two distinct points on its supporting line in
/// lexicographic order. The curve's direction points from the first to the second one,
/// i.e. towards its [CurveEnd::Max] end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct LinearCurve<S> {
    kind: LinearKind,
    low: Point2<S>,
    high: Point2<S>,
    // For rays: true if the ray starts at `low` and extends towards `high`.
    starts_low: bool,
}

impl<S: ArrangementNum> LinearCurve<S> {
    fn ordered(kind: LinearKind, p: Point2<S>, q: Point2<S>) -> Self {
        debug_assert!(p != q, "Degenerate linear curve");
        if p.cmp_xy(&q) == Ordering::Less {
            LinearCurve {
                kind,
                low: p,
                high: q,
                starts_low: true,
            }
        } else {
            LinearCurve {
                kind,
                low: q,
                high: p,
                starts_low: false,
            }
        }
    }

    /// Creates a bounded segment between two distinct points.
    pub fn segment(p: Point2<S>, q: Point2<S>) -> Self {
        Self::ordered(LinearKind::Segment, p, q)
    }

    /// Creates a ray emanating from `source` and passing through `through`.
    pub fn ray(source: Point2<S>, through: Point2<S>) -> Self {
        Self::ordered(LinearKind::Ray, source, through)
    }

    /// Creates a line passing through two distinct points.
    pub fn line(p: Point2<S>, q: Point2<S>) -> Self {
        Self::ordered(LinearKind::Line, p, q)
    }

    /// Returns `true` if this curve is a segment.
    pub fn is_segment(&self) -> bool {
        self.kind == LinearKind::Segment
    }

    /// Returns `true` if this curve is a ray.
    pub fn is_ray(&self) -> bool {
        self.kind == LinearKind::Ray
    }

    /// Returns `true` if this curve is a line.
    pub fn is_line(&self) -> bool {
        self.kind == LinearKind::Line
    }

    /// Returns `true` if the curve is parallel to the y axis.
    pub fn is_vertical(&self) -> bool {
        self.low.x == self.high.x
    }

    /// Returns `true` if the given end of this curve is a finite point.
    pub fn has_bounded_end(&self, end: CurveEnd) -> bool {
        match self.kind {
            LinearKind::Segment => true,
            LinearKind::Line => false,
            LinearKind::Ray => match end {
                CurveEnd::Min => self.starts_low,
                CurveEnd::Max => !self.starts_low,
            },
        }
    }

    /// Returns the endpoint at the given end.
    ///
    /// Returns `None` if that end is unbounded.
    pub fn end_point(&self, end: CurveEnd) -> Option<Point2<S>> {
        if !self.has_bounded_end(end) {
            return None;
        }
        Some(match end {
            CurveEnd::Min => self.low,
            CurveEnd::Max => self.high,
        })
    }

    fn direction(&self) -> Point2<S> {
        self.high.sub(self.low)
    }

    /// Returns a defining point of this non-vertical curve whose x coordinate differs from
    /// `x`, and whether it lies to the right of `x`.
    fn defining_point_off(&self, x: S) -> (Point2<S>, bool) {
        if self.low.x != x {
            (self.low, cmp_num(self.low.x, x) == Ordering::Greater)
        } else {
            (self.high, true)
        }
    }
}

/// Compares the slopes of two non-vertical curves passing through `p`.
///
/// Returns `Greater` if `cv2` is steeper than `cv1`. The orientation is evaluated exactly
/// on `p` and one defining point of each curve.
fn compare_slopes_at<S: ArrangementNum>(
    cv1: &LinearCurve<S>,
    cv2: &LinearCurve<S>,
    p: &Point2<S>,
) -> Ordering {
    let (q1, right1) = cv1.defining_point_off(p.x);
    let (q2, right2) = cv2.defining_point_off(p.x);
    let orientation = side_query(*p, q1, q2).as_ordering();
    if right1 == right2 {
        orientation
    } else {
        orientation.reverse()
    }
}

/// Geometry traits for segments, rays and lines.
///
/// The category of these traits is [Unbounded]: rays and lines end at infinity and are
/// anchored on the fictitious boundary of an arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTraits<S> {
    coordinate: PhantomData<S>,
}

impl<S> LinearTraits<S> {
    /// Creates new linear traits.
    pub fn new() -> Self {
        LinearTraits {
            coordinate: PhantomData,
        }
    }
}

impl<S: ArrangementNum> ArrangementTraits for LinearTraits<S> {
    type Point = Point2<S>;
    type Curve = LinearCurve<S>;
    type Category = Unbounded;

    fn compare_x(&self, p1: &Point2<S>, p2: &Point2<S>) -> Ordering {
        cmp_num(p1.x, p2.x)
    }

    fn compare_xy(&self, p1: &Point2<S>, p2: &Point2<S>) -> Ordering {
        p1.cmp_xy(p2)
    }

    fn construct_min_vertex(&self, cv: &LinearCurve<S>) -> Point2<S> {
        debug_assert!(cv.has_bounded_end(CurveEnd::Min));
        cv.low
    }

    fn construct_max_vertex(&self, cv: &LinearCurve<S>) -> Point2<S> {
        debug_assert!(cv.has_bounded_end(CurveEnd::Max));
        cv.high
    }

    fn is_vertical(&self, cv: &LinearCurve<S>) -> bool {
        cv.is_vertical()
    }

    fn compare_y_at_x(&self, p: &Point2<S>, cv: &LinearCurve<S>) -> Ordering {
        if !cv.is_vertical() {
            return side_query(cv.low, cv.high, *p).as_ordering();
        }
        if let Some(low) = cv.end_point(CurveEnd::Min) {
            if cmp_num(p.y, low.y) == Ordering::Less {
                return Ordering::Less;
            }
        }
        if let Some(high) = cv.end_point(CurveEnd::Max) {
            if cmp_num(p.y, high.y) == Ordering::Greater {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    fn compare_y_at_x_left(
        &self,
        cv1: &LinearCurve<S>,
        cv2: &LinearCurve<S>,
        p: &Point2<S>,
    ) -> Ordering {
        match (cv1.is_vertical(), cv2.is_vertical()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Both curves pass through p, only their slopes matter.
            (false, false) => compare_slopes_at(cv1, cv2, p),
        }
    }

    fn compare_y_at_x_right(
        &self,
        cv1: &LinearCurve<S>,
        cv2: &LinearCurve<S>,
        p: &Point2<S>,
    ) -> Ordering {
        match (cv1.is_vertical(), cv2.is_vertical()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_slopes_at(cv1, cv2, p).reverse(),
        }
    }

    fn equal_curves(&self, cv1: &LinearCurve<S>, cv2: &LinearCurve<S>) -> bool {
        if cv1.kind != cv2.kind {
            return false;
        }
        let collinear = side_query(cv1.low, cv1.high, cv2.low).is_on_line()
            && side_query(cv1.low, cv1.high, cv2.high).is_on_line();
        match cv1.kind {
            LinearKind::Segment => cv1.low == cv2.low && cv1.high == cv2.high,
            LinearKind::Line => collinear,
            LinearKind::Ray => {
                collinear
                    && cv1.starts_low == cv2.starts_low
                    && cv1.end_point(CurveEnd::Min) == cv2.end_point(CurveEnd::Min)
                    && cv1.end_point(CurveEnd::Max) == cv2.end_point(CurveEnd::Max)
            }
        }
    }

    fn parameter_space_in_x(&self, cv: &LinearCurve<S>, end: CurveEnd) -> BoundaryType {
        if cv.has_bounded_end(end) || cv.is_vertical() {
            return BoundaryType::NoBoundary;
        }
        match end {
            CurveEnd::Min => BoundaryType::MinusInfinity,
            CurveEnd::Max => BoundaryType::PlusInfinity,
        }
    }

    fn parameter_space_in_y(&self, cv: &LinearCurve<S>, end: CurveEnd) -> BoundaryType {
        if cv.has_bounded_end(end) || !cv.is_vertical() {
            return BoundaryType::NoBoundary;
        }
        match end {
            CurveEnd::Min => BoundaryType::MinusInfinity,
            CurveEnd::Max => BoundaryType::PlusInfinity,
        }
    }

    fn compare_x_on_boundary(&self, p: &Point2<S>, cv: &LinearCurve<S>, _end: CurveEnd) -> Ordering {
        debug_assert!(cv.is_vertical());
        cmp_num(p.x, cv.low.x)
    }

    fn compare_x_curve_ends_on_boundary(
        &self,
        cv1: &LinearCurve<S>,
        _end1: CurveEnd,
        cv2: &LinearCurve<S>,
        _end2: CurveEnd,
    ) -> Ordering {
        debug_assert!(cv1.is_vertical() && cv2.is_vertical());
        cmp_num(cv1.low.x, cv2.low.x)
    }

    // The curves share no point, so slopes are compared on the rounded direction vectors.
    fn compare_y_near_boundary(
        &self,
        cv1: &LinearCurve<S>,
        cv2: &LinearCurve<S>,
        end: CurveEnd,
    ) -> Ordering {
        let slopes = cross_sign(cv1.direction(), cv2.direction());
        if slopes != Ordering::Equal {
            // A larger slope is higher towards +∞ and lower towards -∞.
            return match end {
                CurveEnd::Max => slopes.reverse(),
                CurveEnd::Min => slopes,
            };
        }
        // Parallel curves keep their vertical order everywhere.
        side_query(cv1.low, cv1.high, cv2.low).as_ordering().reverse()
    }
}

#[cfg(test)]
mod test {
    use super::{LinearCurve, LinearTraits};
    use crate::{ArrangementTraits, BoundaryType, CurveEnd, Point2};
    use std::cmp::Ordering;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_parameter_space() {
        let traits = LinearTraits::new();
        let line = LinearCurve::line(p(0.0, 0.0), p(1.0, 1.0));
        assert_eq!(
            traits.parameter_space_in_x(&line, CurveEnd::Min),
            BoundaryType::MinusInfinity
        );
        assert_eq!(
            traits.parameter_space_in_x(&line, CurveEnd::Max),
            BoundaryType::PlusInfinity
        );
        assert_eq!(
            traits.parameter_space_in_y(&line, CurveEnd::Max),
            BoundaryType::NoBoundary
        );

        let down_ray = LinearCurve::ray(p(0.0, 0.0), p(0.0, -1.0));
        assert_eq!(
            traits.parameter_space_in_y(&down_ray, CurveEnd::Min),
            BoundaryType::MinusInfinity
        );
        assert!(traits.is_bounded_end(&down_ray, CurveEnd::Max));
        assert_eq!(traits.construct_max_vertex(&down_ray), p(0.0, 0.0));

        let left_ray = LinearCurve::ray(p(2.0, 0.0), p(1.0, 0.0));
        assert!(!traits.is_bounded_end(&left_ray, CurveEnd::Min));
        assert_eq!(left_ray.end_point(CurveEnd::Max), Some(p(2.0, 0.0)));
    }

    #[test]
    fn test_compare_y_near_boundary() {
        let traits = LinearTraits::new();
        let flat = LinearCurve::line(p(0.0, 0.0), p(1.0, 0.0));
        let steep = LinearCurve::line(p(0.0, 0.0), p(1.0, 2.0));
        let flat_high = LinearCurve::line(p(0.0, 1.0), p(1.0, 1.0));
        assert_eq!(
            traits.compare_y_near_boundary(&flat, &steep, CurveEnd::Max),
            Ordering::Less
        );
        assert_eq!(
            traits.compare_y_near_boundary(&flat, &steep, CurveEnd::Min),
            Ordering::Greater
        );
        assert_eq!(
            traits.compare_y_near_boundary(&flat, &flat_high, CurveEnd::Min),
            Ordering::Less
        );
        assert_eq!(
            traits.compare_y_near_boundary(&flat_high, &flat, CurveEnd::Max),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_y_at_x_unbounded_vertical() {
        let traits = LinearTraits::new();
        let up_ray = LinearCurve::ray(p(0.0, 1.0), p(0.0, 2.0));
        assert_eq!(traits.compare_y_at_x(&p(0.0, 0.0), &up_ray), Ordering::Less);
        assert_eq!(traits.compare_y_at_x(&p(0.0, 100.0), &up_ray), Ordering::Equal);
        assert_eq!(traits.compare_x_on_boundary(&p(-1.0, 0.0), &up_ray, CurveEnd::Max), Ordering::Less);
    }

    #[test]
    fn test_compare_y_at_x_nearly_parallel() {
        let traits = LinearTraits::new();
        // high.x - low.x rounds to the same value for both curves.
        let x = 2.0f64.powi(60);
        let shared = p(x, 1.0);
        let flatter = LinearCurve::segment(p(-1.0, 0.0), shared);
        let steeper = LinearCurve::segment(p(0.0, 0.0), shared);
        assert_eq!(
            traits.compare_y_at_x_left(&flatter, &steeper, &shared),
            Ordering::Greater
        );
        assert_eq!(
            traits.compare_y_at_x_left(&steeper, &flatter, &shared),
            Ordering::Less
        );
        assert_eq!(
            traits.compare_y_at_x_right(&flatter, &steeper, &shared),
            Ordering::Less
        );

        let continuation = LinearCurve::segment(shared, p(2.0 * x, 2.0));
        assert_eq!(
            traits.compare_y_at_x_right(&flatter, &continuation, &shared),
            Ordering::Less
        );
        assert_eq!(
            traits.compare_y_at_x_right(&continuation, &continuation, &shared),
            Ordering::Equal
        );
    }

    #[test]
    fn test_equal_curves() {
        let traits = LinearTraits::new();
        let l1 = LinearCurve::line(p(0.0, 0.0), p(1.0, 1.0));
        let l2 = LinearCurve::line(p(3.0, 3.0), p(-2.0, -2.0));
        assert!(traits.equal_curves(&l1, &l2));
        let r1 = LinearCurve::ray(p(0.0, 0.0), p(1.0, 1.0));
        let r2 = LinearCurve::ray(p(0.0, 0.0), p(5.0, 5.0));
        assert!(traits.equal_curves(&r1, &r2));
        assert!(!traits.equal_curves(&r1, &l1));
    }
}
