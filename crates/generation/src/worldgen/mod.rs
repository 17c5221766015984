//! Procedural world-graph generation.
//!
//! Produces the conceptual province graph a generation run renders:
//! one node per layout grid cell with noise-assigned terrain, start
//! positions for every roster slot, and 4-neighbor connections. Pure
//! function of its inputs — the same arguments always produce the same
//! graph.

mod generate;
mod types;

#[cfg(test)]
mod tests;

pub use generate::{generate_world, GenArgs};
pub use types::{Connection, ConnectionKind, Node, Terrain, WorldGraph};
