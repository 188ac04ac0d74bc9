//! Request payload models and validation

pub mod ad;
pub mod validation;

pub use ad::{AdPatch, CreateAd};
pub use validation::{FieldError, FieldProblem, ValidationError};
