//! The ten pattern demonstrations
//!
//! Each module exposes the pattern's types, a `produce` function usable as
//! a [`patterns_core::Example`], and the documented `EXPECTED` lines.

pub mod adapter;
pub mod command;
pub mod composite;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
