//! Common - Shared Types and Utilities for Swaplane Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the Swaplane smart contracts: the asset abstraction, the
//! delivery payload every receiver adapter decodes, and the two-step
//! ownership helpers.

pub mod asset;
pub mod ownable;
pub mod payload;

pub use asset::{Asset, AssetInfo};
pub use ownable::{Ownership, OwnershipResponse};
pub use payload::{decode_delivery, DeliveryPayload, SwapStep, TRANSFER_ID_LEN};
