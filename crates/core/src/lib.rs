//! Domain logic for the Sanggar Alam project estimator.
//!
//! Everything in this crate is pure apart from reading model artifacts from
//! disk: the tariff tables, the pricing pipeline, and the fitted encoders and
//! regressors that feed it.

pub mod error;
pub mod estimation;
pub mod model;
pub mod tariff;
pub mod types;
