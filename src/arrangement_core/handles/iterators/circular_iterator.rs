use core::marker::PhantomData;

use super::super::HalfedgeHandle;
use crate::ArrangementTraits;

pub trait NextBackFn {
    fn next<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T>;

    fn next_back<T: ArrangementTraits>(halfedge: HalfedgeHandle<T>) -> HalfedgeHandle<T>;
}

/// Iterates over a closed chain of halfedges, starting and ending at the same halfedge.
///
/// Used for boundary cycles (along `next`) and for the halfedges around a vertex.
pub struct CircularIterator<'a, T: ArrangementTraits, NB> {
    current_handle: Option<HalfedgeHandle<'a, T>>,
    final_handle: Option<HalfedgeHandle<'a, T>>,
    iteration_finished: bool,
    next_back_fn: PhantomData<NB>,
}

impl<'a, T: ArrangementTraits, NB: NextBackFn> CircularIterator<'a, T, NB> {
    pub(crate) fn new(start: HalfedgeHandle<'a, T>) -> Self {
        CircularIterator {
            current_handle: Some(start),
            final_handle: Some(start),
            iteration_finished: false,
            next_back_fn: PhantomData,
        }
    }

    pub(crate) fn new_empty() -> Self {
        CircularIterator {
            current_handle: None,
            final_handle: None,
            iteration_finished: true,
            next_back_fn: PhantomData,
        }
    }
}

impl<'a, T: ArrangementTraits, NB> Clone for CircularIterator<'a, T, NB> {
    fn clone(&self) -> Self {
        CircularIterator {
            current_handle: self.current_handle,
            final_handle: self.final_handle,
            iteration_finished: self.iteration_finished,
            next_back_fn: PhantomData,
        }
    }
}

impl<'a, T: ArrangementTraits, NB: NextBackFn> Iterator for CircularIterator<'a, T, NB> {
    type Item = HalfedgeHandle<'a, T>;

    fn next(&mut self) -> Option<HalfedgeHandle<'a, T>> {
        if self.iteration_finished {
            return None;
        }
        let result = self.current_handle?;
        let next = NB::next(result);
        self.current_handle = Some(next);
        if Some(next) == self.final_handle {
            self.iteration_finished = true;
        }
        Some(result)
    }
}

impl<'a, T: ArrangementTraits, NB: NextBackFn> DoubleEndedIterator
    for CircularIterator<'a, T, NB>
{
    fn next_back(&mut self) -> Option<HalfedgeHandle<'a, T>> {
        if self.iteration_finished {
            return None;
        }
        let previous = NB::next_back(self.final_handle?);
        self.final_handle = Some(previous);
        if self.current_handle == self.final_handle {
            self.iteration_finished = true;
        }
        Some(previous)
    }
}
