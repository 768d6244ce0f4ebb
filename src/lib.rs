// #![deny(unused_crate_dependencies)]

mod generic;
mod presenter;
mod store;

pub use generic::*;
pub use presenter::*;
pub use store::*;
