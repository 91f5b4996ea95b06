//! Core error types used across the system

use crate::money::MoneyError;
use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl KernelError {
    pub fn validation(message: impl Into<String>) -> Self {
        KernelError::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        KernelError::Configuration(message.into())
    }
}
