//! Outbound adapters driven by the domain through its ports.

pub mod persistence;
