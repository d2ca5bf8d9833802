//! Shared types for the CoinCap V2 API
//!
//! This crate provides the leaf type definitions used across the CoinCap SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Timestamp`] - Point in time with the API's epoch-millisecond wire encoding
//! - [`Interval`] - Point-in-time intervals for historical market data

pub mod interval;
pub mod timestamp;

// Re-export commonly used types
pub use interval::*;
pub use timestamp::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
