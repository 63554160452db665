use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::math::side_query;
use crate::point::cmp_num;
use crate::{ArrangementNum, ArrangementTraits, Bounded, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line segment between two distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Segment<S> {
    source: Point2<S>,
    target: Point2<S>,
}

impl<S: ArrangementNum> Segment<S> {
    /// Creates a new segment.
    ///
    /// `source` and `target` must be different.
    pub fn new(source: Point2<S>, target: Point2<S>) -> Self {
        debug_assert!(source != target, "Degenerate segment");
        Segment { source, target }
    }

    /// Returns the point this segment was created from.
    pub fn source(&self) -> Point2<S> {
        self.source
    }

    /// Returns the point this segment was created to.
    pub fn target(&self) -> Point2<S> {
        self.target
    }

    /// Returns the lexicographically smaller endpoint.
    pub fn min(&self) -> Point2<S> {
        if self.source.cmp_xy(&self.target) == Ordering::Less {
            self.source
        } else {
            self.target
        }
    }

    /// Returns the lexicographically larger endpoint.
    pub fn max(&self) -> Point2<S> {
        if self.source.cmp_xy(&self.target) == Ordering::Less {
            self.target
        } else {
            self.source
        }
    }

    /// Returns `true` if both endpoints share the same x coordinate.
    pub fn is_vertical(&self) -> bool {
        self.source.x == self.target.x
    }
}

/// Geometry traits for bounded line segments.
///
/// All predicates are exact for `f64` input: orientation tests use adaptive precision
/// arithmetic, comparisons never perform arithmetic at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentTraits<S> {
    coordinate: PhantomData<S>,
}

impl<S> SegmentTraits<S> {
    /// Creates new segment traits.
    pub fn new() -> Self {
        SegmentTraits {
            coordinate: PhantomData,
        }
    }
}

impl<S: ArrangementNum> ArrangementTraits for SegmentTraits<S> {
    type Point = Point2<S>;
    type Curve = Segment<S>;
    type Category = Bounded;

    fn compare_x(&self, p1: &Point2<S>, p2: &Point2<S>) -> Ordering {
        cmp_num(p1.x, p2.x)
    }

    fn compare_xy(&self, p1: &Point2<S>, p2: &Point2<S>) -> Ordering {
        p1.cmp_xy(p2)
    }

    fn construct_min_vertex(&self, cv: &Segment<S>) -> Point2<S> {
        cv.min()
    }

    fn construct_max_vertex(&self, cv: &Segment<S>) -> Point2<S> {
        cv.max()
    }

    fn is_vertical(&self, cv: &Segment<S>) -> bool {
        cv.is_vertical()
    }

    fn compare_y_at_x(&self, p: &Point2<S>, cv: &Segment<S>) -> Ordering {
        if cv.is_vertical() {
            let (low, high) = (cv.min(), cv.max());
            if cmp_num(p.y, low.y) == Ordering::Less {
                Ordering::Less
            } else if cmp_num(p.y, high.y) == Ordering::Greater {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        } else {
            side_query(cv.min(), cv.max(), *p).as_ordering()
        }
    }

    fn compare_y_at_x_left(&self, cv1: &Segment<S>, cv2: &Segment<S>, p: &Point2<S>) -> Ordering {
        match (cv1.is_vertical(), cv2.is_vertical()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Looking left from p, the left side of p -> cv1.min() is below cv1.
            (false, false) => side_query(*p, cv1.min(), cv2.min()).as_ordering(),
        }
    }

    fn compare_y_at_x_right(&self, cv1: &Segment<S>, cv2: &Segment<S>, p: &Point2<S>) -> Ordering {
        match (cv1.is_vertical(), cv2.is_vertical()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => side_query(*p, cv1.max(), cv2.max()).as_ordering().reverse(),
        }
    }

    fn equal_curves(&self, cv1: &Segment<S>, cv2: &Segment<S>) -> bool {
        cv1.min() == cv2.min() && cv1.max() == cv2.max()
    }
}
