#![allow(unused_imports)]
use claims::debug_assert_ok;

pub mod algorithms;
pub mod data;
mod error;

pub use algorithms::merge::Event;
pub use algorithms::predicates::{in_circle, orientation, CirclePosition, Orientation};
pub use algorithms::triangulation::{triangulate, triangulate_events, EventLog};
pub use data::{Coordinate, Point, Topology, VertexId};
pub use error::Error;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;
