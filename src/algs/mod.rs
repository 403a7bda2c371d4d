//! Re-export public algorithms.

pub mod deformation_dofs;

pub use deformation_dofs::extract_deformation_dofs;
