//! Tessera Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that board support
//! packages implement for their LCD controllers. Panel drivers in
//! `tessera-drivers` are written against these traits, so the same
//! clipping and blitting code runs on any controller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Rendering engine                       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-core (registry + dispatch)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-drivers (panel adapters)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`lcd::LcdController`] - Pixel and rectangle output

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;

pub use lcd::{Dimensions, LcdController, RawColor};
