//! Skin presets and cape fetching for Minecraft clients
//!
//! - [`presets::SkinPreset`]: a named skin plus the cape provider to show with it
//! - [`capes::CapeProvider`]: the closed set of cape providers and their wire ids
//! - [`capes::CapeFetcher`]: best-effort cape download through capes.dev, with a
//!   configurable fallback order for the default provider

pub mod capes;
pub mod config;
pub mod error;
pub mod logging;
pub mod presets;
pub mod session;
pub mod skins;
pub mod state;

pub use capes::{CapeFetch, CapeFetcher, CapeProvider};
pub use config::SkinShuffleConfig;
pub use error::{AppError, AppResult};
pub use presets::SkinPreset;
pub use skins::{Skin, SkinModel};
