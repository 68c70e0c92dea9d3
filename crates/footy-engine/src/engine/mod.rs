pub use self::{entropy::*, selector::*, session::*};

mod entropy;
mod selector;
mod session;
