pub mod default_preset;

use crate::capes::CapeProvider;
use crate::error::AppResult;
use crate::skins::Skin;
use serde::{Deserialize, Serialize};

pub use default_preset::generate_default_preset;

pub const UNNAMED_PRESET: &str = "Unnamed Preset";

/// A named skin plus the cape provider to show with it.
///
/// Serialized as `{ "skin": {..}, "name": "..", "cape": "<provider id>" }`;
/// `cape` is optional and falls back to the default provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkinPreset {
    skin: Skin,
    name: String,
    #[serde(rename = "cape", default)]
    cape_provider: CapeProvider,
}

impl SkinPreset {
    pub fn new(skin: Skin) -> Self {
        Self::with_details(skin, UNNAMED_PRESET, None)
    }

    /// A `None` provider is stored as [`CapeProvider::Default`]
    pub fn with_details(
        skin: Skin,
        name: impl Into<String>,
        cape_provider: Option<CapeProvider>,
    ) -> Self {
        Self {
            skin,
            name: name.into(),
            cape_provider: cape_provider.unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    pub fn set_skin(&mut self, skin: Skin) {
        self.skin = skin;
    }

    pub fn cape_provider(&self) -> CapeProvider {
        self.cape_provider
    }

    pub fn set_cape_provider(&mut self, cape_provider: CapeProvider) {
        self.cape_provider = cape_provider;
    }

    /// Overwrite every field of `self` with the values of `other`
    pub fn copy_from(&mut self, other: &SkinPreset) {
        self.name.clone_from(&other.name);
        self.skin.clone_from(&other.skin);
        self.cape_provider = other.cape_provider;
    }

    /// Independent preset with the same skin, name and cape provider
    pub fn copy(&self) -> SkinPreset {
        Self::with_details(self.skin.clone(), self.name.clone(), Some(self.cape_provider))
    }

    /// Decode a preset. An unknown `cape` id fails the whole preset.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
