//! Deterministic simulation module
//!
//! Everything that decides where dots are and which of them connect lives
//! here. This module must stay pure:
//! - Randomness only through an injected RNG
//! - Whole-collection replacement per tick
//! - No rendering or platform dependencies

pub mod dot;
pub mod grid;
pub mod motion;
pub mod proximity;
pub mod rng;
pub mod state;

pub use dot::{Dot, create_dot, create_field, dot_count};
pub use motion::{advance, advance_field, deviate_heading, wrap_position};
pub use proximity::{
    AllPairs, Edge, all_pairs, build_edges, build_edges_indexed, connection_radius, edge_opacity,
    edges_for,
};
pub use rng::{ConstantRng, RngState};
pub use state::{Constellation, Viewport};
