pub mod median;
pub mod merge;
pub mod predicates;
pub mod tangent;
pub mod triangulation;

#[doc(inline)]
pub use triangulation::{triangulate, triangulate_events};
