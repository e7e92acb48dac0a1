//! An N×N×N twisty-cube model with a slice rotation engine and a layer-by-layer
//! solver for the 3×3×3.

pub mod cube;
pub mod r#move;
pub mod prelude;
pub mod rotation;
pub mod solver;
