pub mod circuit;
pub mod constants;
pub mod grid;
pub mod particles;
pub mod path;
pub mod signal;

pub use circuit::*;
pub use constants::*;
pub use grid::*;
pub use particles::*;
pub use path::*;
pub use signal::*;
