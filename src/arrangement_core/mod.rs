mod boundary;
mod comparator;
mod dcel;
pub(crate) mod dcel_operations;
mod handles;
mod insertion;
mod relocation;
mod removal;
mod validation;

pub(crate) use dcel::{Dcel, Incidence, VertexConnection};
pub(crate) use dcel_operations::Corners;

pub use handles::iterators;
pub use handles::*;

pub use validation::ValidationError;
