//! Deterministic math kernel for lockstep simulation.
//!
//! Every operation in this crate produces bit-identical results for the same
//! inputs on any conforming platform, so replicas that only exchange inputs
//! stay in sync. Two families of scalars back the value types:
//!
//! - [`Fixed64`] / [`Fixed32`]: fixed-point values over a raw integer, with
//!   widened intermediates for multiply and divide.
//! - [`Det64`]: an `f64` restricted to IEEE-754 base operations.
//!
//! Transcendentals (sin, cos, atan2, ...) and the square root are implemented
//! once, in [`funcs`], from those base operations; the platform libm is never
//! called. Vectors, quaternions, rotators, matrices, planes, and transforms
//! are generic over any scalar implementing [`DetReal`].

mod utils;

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod fixed;
pub use fixed::*;

mod det_float;
pub use det_float::*;

pub mod funcs;

mod vec;
pub use vec::*;

mod quat;
pub use quat::*;

mod rotator;
pub use rotator::*;

mod mat;
pub use mat::*;

mod plane;
pub use plane::*;

mod transform;
pub use transform::*;
