pub use self::{cell::*, grid::*, word::*};

pub(crate) mod cell;
pub(crate) mod grid;
pub(crate) mod word;
