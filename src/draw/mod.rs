//! Draw engine: constrained random lottery number sets
//!
//! Pure logic with no UI or IO dependencies. The random source is passed in
//! by the caller so tests and `--seed` runs are reproducible.

pub mod constraints;
pub mod engine;
pub mod number_set;

pub use constraints::{Constraints, DrawError};
pub use engine::{draw_sets, DrawDiagnostic, DrawRequest, PoolSharing, Severity, DEFAULT_SET_SIZE};
pub use number_set::{NumberSet, MAX_NUMBER};
