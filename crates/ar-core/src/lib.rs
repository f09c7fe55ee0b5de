//! ar-core: algebraic foundation for arbor.
//!
//! Contains:
//! - algebra (monoid / group contracts + stateless numeric algebras)
//! - mapper (edge -> weight extraction)
//! - numeric (Real + finite check)
//! - weight (validity contract for weight values)
//! - error (shared error types)

pub mod algebra;
pub mod error;
pub mod mapper;
pub mod numeric;
pub mod weight;

// Re-exports: nice ergonomics for downstream crates
pub use algebra::{Group, IntegerAddition, Monoid, RealAddition, fold_all};
pub use error::{CoreError, CoreResult};
pub use mapper::{MapFn, WeightMapper};
pub use numeric::*;
pub use weight::Weight;
