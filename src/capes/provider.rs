use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prefix for cape provider translation keys
const TRANSLATION_KEY_PREFIX: &str = "skinshuffle.cape_provider.";

/// Source of a player's cape
///
/// `Default` is a meta-provider: fetching through it tries every concrete
/// provider in the configured fallback order. The wire form is the provider
/// id string (see [`CapeProvider::provider_id`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CapeProvider {
    #[default]
    Default,
    Mojang,
    Optifine,
    MinecraftCapes,
}

/// Id table shared by `resolve` and `provider_id`
const PROVIDER_IDS: [(&str, CapeProvider); 4] = [
    ("default", CapeProvider::Default),
    ("minecraft", CapeProvider::Mojang),
    ("optifine", CapeProvider::Optifine),
    ("minecraftcapes", CapeProvider::MinecraftCapes),
];

impl CapeProvider {
    /// Every provider, meta-provider included
    pub const ALL: [CapeProvider; 4] = [
        CapeProvider::Default,
        CapeProvider::Mojang,
        CapeProvider::Optifine,
        CapeProvider::MinecraftCapes,
    ];

    /// Concrete providers in declaration order. This is also the default
    /// fallback order for [`CapeProvider::Default`].
    pub const CONCRETE: [CapeProvider; 3] = [
        CapeProvider::Mojang,
        CapeProvider::Optifine,
        CapeProvider::MinecraftCapes,
    ];

    /// Look up a provider by its exact, case-sensitive id
    pub fn resolve(id: &str) -> AppResult<Self> {
        PROVIDER_IDS
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, provider)| *provider)
            .ok_or_else(|| AppError::InvalidCapeProvider(id.to_string()))
    }

    pub fn provider_id(self) -> &'static str {
        match self {
            CapeProvider::Default => PROVIDER_IDS[0].0,
            CapeProvider::Mojang => PROVIDER_IDS[1].0,
            CapeProvider::Optifine => PROVIDER_IDS[2].0,
            CapeProvider::MinecraftCapes => PROVIDER_IDS[3].0,
        }
    }

    pub fn translation_key(self) -> String {
        format!("{}{}", TRANSLATION_KEY_PREFIX, self.provider_id())
    }

    pub fn is_default(self) -> bool {
        self == CapeProvider::Default
    }
}

impl FromStr for CapeProvider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for CapeProvider {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl From<CapeProvider> for String {
    fn from(provider: CapeProvider) -> Self {
        provider.provider_id().to_string()
    }
}

impl std::fmt::Display for CapeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.provider_id())
    }
}
