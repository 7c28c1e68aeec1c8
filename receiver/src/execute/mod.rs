//! Execute handlers for the receiver, organized by provider:
//! - `axelar` - gateway-validated contract-call deliveries
//! - `ccip` - router-gated deliveries
//! - `stargate` - LayerZero compose deliveries with the replay guard
//! - `oif` - Open-Intent output-settler fill notifications
//! - `dispatch` - the self-addressed execution hand-off shared by all of them
//! - `admin` - owner recovery sweep and trusted-address setters

mod admin;
mod axelar;
mod ccip;
mod dispatch;
mod oif;
mod stargate;

pub use admin::*;
pub use axelar::*;
pub use ccip::*;
pub use dispatch::*;
pub use oif::*;
pub use stargate::*;
