//! # sparco-core
//!
//! Patch reshaping for 4-D spatial tensors: the unfold/fold pair used by
//! sparse-coding pipelines to move between a `(batch, N1, N2, N3, N4)`
//! tensor and its batched patch matrix.
//!
//! - **Unfold:** [`unfold`] extracts every (possibly overlapping, strided,
//!   dilated, padded) kernel-sized patch into a
//!   `(batch, L_a, L_b, k0*k1*k2*k3)` tensor, where `L_a` counts patch
//!   positions over the first spatial axis pair and `L_b` over the second.
//! - **Fold:** [`fold`] is the structural inverse, scattering patch
//!   content back and **summing** overlapping contributions (overlap-add).
//! - **Coverage:** [`overlap_counts`] gives the per-position patch count,
//!   the divisor a caller needs to turn the overlap-add sum into a true
//!   inverse of a unit-stride unfold.
//!
//! All operations are pure, synchronous functions over `ndarray` arrays;
//! there is no shared state between calls.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::Array5;
//! use sparco_core::{fold, unfold};
//!
//! let x = Array5::<f64>::ones((1, 6, 6, 6, 6));
//!
//! // Every 2x2x3x3 patch at unit stride
//! let patches = unfold(&x.view(), &[2, 2, 3, 3], 1, 0, 1).unwrap();
//! assert_eq!(patches.shape(), &[1, 25, 16, 36]);
//!
//! // Overlap-add reassembly
//! let back = fold(&patches.view(), &[1, 6, 6, 6, 6], &[2, 2, 3, 3], 1, 0, 1).unwrap();
//! assert_eq!(back.shape(), &[1, 6, 6, 6, 6]);
//! ```
//!
//! ## Error Handling
//!
//! Shape violations surface eagerly as [`InvalidShapeError`] before any
//! output is allocated:
//!
//! ```
//! use ndarray::Array5;
//! use sparco_core::unfold;
//!
//! let x = Array5::<f64>::zeros((1, 4, 4, 4, 4));
//!
//! // kernel tuple must have four entries
//! assert!(unfold(&x.view(), &[2, 2], 1, 0, 1).is_err());
//!
//! // dilated kernel must fit the padded extent
//! assert!(unfold(&x.view(), &[5, 2, 2, 2], 1, 0, 1).is_err());
//! ```

#![deny(warnings)]

pub mod error;
mod fold;
mod grid;
mod unfold;

#[cfg(test)]
mod property_tests;

pub use error::{InvalidShapeError, Result};
pub use fold::{fold, overlap_counts};
pub use unfold::unfold;
