//! Core type definitions used across the Szachmart workspace.

pub mod money;

pub use money::Money;
