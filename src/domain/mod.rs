/// Domain module containing core business logic and data types
///
/// This module defines the measurement record (Workout), the three
/// training variants (Running, Walking, Swimming), the Activity trait
/// they share, and the summary value that reports are rendered from.

pub mod activity;
pub mod running;
pub mod summary;
pub mod swimming;
pub mod types;
pub mod walking;
pub mod workout;

// Re-export public types for easy access
pub use activity::*;
pub use running::*;
pub use summary::*;
pub use swimming::*;
pub use types::*;
pub use walking::*;
pub use workout::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid workout label: {0}")]
    InvalidLabel(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Invalid height: {0}")]
    InvalidHeight(String),

    #[error("Invalid pool length: {0}")]
    InvalidPoolLength(String),
}
