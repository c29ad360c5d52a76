// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Typed failures raised while validating variants, deriving
// axis values, or checking a plot configuration.
//
// The outer layers work with anyhow::Result and attach context;
// these variants stay matchable through downcast_ref::<PlotError>().

use thiserror::Error;

/// Everything that can go wrong before a single pixel is drawn.
#[derive(Debug, Error, PartialEq)]
pub enum PlotError {
    #[error("variant '{name}' has a zero lower-is-better quality metric; fitness is undefined")]
    ZeroQualityMetric { name: String },

    #[error("variant '{name}' has a non-finite {field}: {value}")]
    NonFiniteMetric {
        name:  String,
        field: &'static str,
        value: f64,
    },

    #[error("variant '{name}': higher-is-better quality metric {value} is outside [0, 1]")]
    QualityOutOfRange { name: String, value: f64 },

    #[error("variant at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("no variants to plot")]
    NoVariants,

    #[error("invalid plot configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, PlotError>;
