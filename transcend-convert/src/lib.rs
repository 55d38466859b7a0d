//! Conversion between operator configuration and the remote schema.
//!
//! Configuration arrives as loosely-typed [`ConfigValue`]s keyed by field
//! name. The remote schema wants typed scalars, typed lists, and nested input
//! objects. Every type assertion between the two happens here, so the
//! reconciler never has to check a value's shape itself.
//!
//! All functions are pure and total: a value either converts in full or the
//! call fails with [`ConvertError::TypeMismatch`]. Nothing is silently
//! dropped.
//!
//! [`ConfigValue`]: transcend_types::ConfigValue

mod error;
mod project;
mod scalar;

pub use error::{ConvertError, ConvertResult};
pub use project::{FieldProjection, IntoConfigValue, from_remote};
pub use scalar::{FromScalar, ValueSetExt, to_nested_list, to_scalar, to_scalar_list};
