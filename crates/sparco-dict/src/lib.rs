//! # sparco-dict
//!
//! Separable cosine dictionaries for 4-D sparse coding.
//!
//! A dictionary column (atom) is a separable product of four 1-D cosine
//! waveforms, one per spatial axis. The crate builds:
//!
//! - **1-D bases:** [`cosine_basis`] — unit-norm cosine columns, mean-removed
//!   beyond the constant (DC) atom.
//! - **4-D dictionaries:** [`separable_dictionary`] — the four per-axis bases
//!   combined by repeated [`kronecker`] products, sample axis re-ordered to
//!   match the patch layout, columns rescaled to exact unit norm.
//!
//! All operations are pure functions over `ndarray` matrices.
//!
//! ## Quick Start
//!
//! ```
//! use sparco_dict::{cosine_basis, separable_dictionary};
//!
//! // one basis per axis
//! let basis = cosine_basis::<f64>(4, 3).unwrap();
//! assert_eq!(basis.shape(), &[4, 3]);
//!
//! // full 4-D dictionary: (4^4 samples) x (3^4 atoms)
//! let dict = separable_dictionary::<f64>(&[4, 4, 4, 4], &[3, 3, 3, 3]).unwrap();
//! assert_eq!(dict.shape(), &[256, 81]);
//! ```
//!
//! ## Features
//!
//! - `parallel`: enables [`kronecker_parallel`] via `ndarray/rayon`.

#![deny(warnings)]

mod cosine;
pub mod error;
mod kronecker;
mod separable;


pub use cosine::cosine_basis;
pub use error::{InvalidShapeError, Result};
pub use kronecker::kronecker;
#[cfg(feature = "parallel")]
pub use kronecker::kronecker_parallel;
pub use separable::separable_dictionary;
