mod handle_defs;
mod handle_impls;
pub mod iterators;
mod public_handles;

pub(crate) use handle_defs::FixedHoleHandle;
pub use public_handles::*;
