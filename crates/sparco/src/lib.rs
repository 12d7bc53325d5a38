//! # SPARCO - Sparse Coding Utilities for 4-D Spatial Data
//!
//! Two small numeric building blocks for signal/image sparse-coding
//! pipelines over 4-D spatial tensors:
//!
//! - **Patch reshaping ([`core`]):** [`unfold`](core::unfold) extracts
//!   every (overlapping, strided, dilated, padded) kernel-sized patch of a
//!   `(batch, N1, N2, N3, N4)` tensor into a batched patch matrix, and
//!   [`fold`](core::fold) reassembles patches by overlap-add.
//! - **Dictionaries ([`dict`]):** [`cosine_basis`](dict::cosine_basis)
//!   builds per-axis 1-D cosine bases and
//!   [`separable_dictionary`](dict::separable_dictionary) combines them
//!   into a unit-column `(samples x atoms)` matrix via Kronecker products.
//!
//! This is the meta crate that re-exports both components; they are
//! independent and share no state.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::Array5;
//! use sparco::prelude::*;
//!
//! // a batch of one 4x4x4x4 signal
//! let x = Array5::<f64>::ones((1, 4, 4, 4, 4));
//!
//! // non-overlapping 2x2x2x2 patches, and a dictionary over the same
//! // patch geometry
//! let patches = unfold(&x.view(), &[2, 2, 2, 2], 1, 0, 2).unwrap();
//! let dict = separable_dictionary::<f64>(&[2, 2, 2, 2], &[2, 2, 2, 2]).unwrap();
//!
//! // dictionary rows line up with the flattened patch content
//! assert_eq!(patches.shape()[3], dict.shape()[0]);
//!
//! // overlap-add reassembly inverts a non-overlapping unfold
//! let back = fold(&patches.view(), &[1, 4, 4, 4, 4], &[2, 2, 2, 2], 1, 0, 2).unwrap();
//! assert_eq!(back, x);
//! ```
//!
//! ## Features
//!
//! - `parallel`: forwards to `sparco-dict/parallel` for a parallel
//!   Kronecker product.

#![deny(warnings)]

// Re-export the components
pub use sparco_core as core;
pub use sparco_dict as dict;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use sparco::prelude::*;
    //!
    //! let basis = cosine_basis::<f64>(8, 4).unwrap();
    //! assert_eq!(basis.shape(), &[8, 4]);
    //! ```

    // Patch reshaping
    pub use crate::core::{fold, overlap_counts, unfold};

    // Dictionary construction
    pub use crate::dict::{cosine_basis, kronecker, separable_dictionary};
}
