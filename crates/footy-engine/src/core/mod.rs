pub use self::{answer::*, dataset::*};

pub(crate) mod answer;
pub(crate) mod dataset;
