//! Cape texture fetching through capes.dev
//!
//! Each concrete provider is a two step lookup:
//! 1. `GET {base}/load/{player}/{provider}` returns `{ "exists": bool, "imageUrl": string? }`
//! 2. `GET {imageUrl}` returns the raw PNG bytes
//!
//! Failures never escape: they are logged, recorded as diagnostics and the
//! provider counts as having no cape.

use crate::capes::CapeProvider;
use crate::config::SkinShuffleConfig;
use crate::error::{AppError, AppResult};
use crate::session::SessionProvider;
use serde::Deserialize;

pub const CAPES_DEV_API: &str = "https://api.capes.dev";

/// Metadata returned by the capes.dev load endpoint
#[derive(Debug, Deserialize)]
struct CapeMetadata {
    exists: bool,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

/// A provider attempt that failed and was treated as "no cape"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapeDiagnostic {
    pub provider: CapeProvider,
    pub message: String,
}

/// Outcome of a cape lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapeFetch {
    /// Raw cape image bytes, `None` when no provider had a cape
    pub texture: Option<Vec<u8>>,
    /// Concrete provider that served the texture
    pub served_by: Option<CapeProvider>,
    /// Failed provider attempts, in the order they were tried
    pub diagnostics: Vec<CapeDiagnostic>,
}

impl CapeFetch {
    pub fn is_found(&self) -> bool {
        self.texture.is_some()
    }

    pub fn into_texture(self) -> Option<Vec<u8>> {
        self.texture
    }
}

/// Cape fetcher bound to a capes.dev endpoint and a fallback order
#[derive(Debug, Clone)]
pub struct CapeFetcher {
    client: reqwest::Client,
    api_base: String,
    fallback_order: Vec<CapeProvider>,
}

impl CapeFetcher {
    /// `fallback_order` is the order the `Default` provider tries concrete
    /// providers in. `Default` entries and repeats are ignored, and concrete
    /// providers missing from the list are appended in declaration order.
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        fallback_order: Vec<CapeProvider>,
    ) -> Self {
        let mut order: Vec<CapeProvider> = Vec::with_capacity(CapeProvider::CONCRETE.len());
        for provider in fallback_order.into_iter().chain(CapeProvider::CONCRETE) {
            if !provider.is_default() && !order.contains(&provider) {
                order.push(provider);
            }
        }

        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            fallback_order: order,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &SkinShuffleConfig) -> Self {
        Self::new(
            client,
            config.cape_api_base.clone(),
            config.cape_fallback_order.clone(),
        )
    }

    pub fn fallback_order(&self) -> &[CapeProvider] {
        &self.fallback_order
    }

    /// Metadata endpoint for a player and concrete provider
    pub fn metadata_url(&self, player_id: &str, provider: CapeProvider) -> String {
        format!(
            "{}/load/{}/{}",
            self.api_base,
            urlencoding::encode(player_id),
            provider.provider_id()
        )
    }

    /// Fetch a player's cape from `provider`.
    /// `player_id` may be a username or a UUID string.
    pub async fn fetch(&self, provider: CapeProvider, player_id: &str) -> CapeFetch {
        let candidates: &[CapeProvider] = if provider.is_default() {
            &self.fallback_order
        } else {
            std::slice::from_ref(&provider)
        };

        let mut outcome = CapeFetch::default();

        for &candidate in candidates {
            match self.fetch_from(candidate, player_id).await {
                Ok(Some(texture)) => {
                    tracing::debug!(
                        provider = %candidate,
                        player = player_id,
                        bytes = texture.len(),
                        "Cape found"
                    );
                    outcome.texture = Some(texture);
                    outcome.served_by = Some(candidate);
                    break;
                }
                Ok(None) => {
                    tracing::debug!(provider = %candidate, player = player_id, "No cape");
                }
                Err(e) => {
                    tracing::warn!(
                        provider = %candidate,
                        player = player_id,
                        error = %e,
                        "Failed to run cape provider"
                    );
                    outcome.diagnostics.push(CapeDiagnostic {
                        provider: candidate,
                        message: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    /// Like [`CapeFetcher::fetch`], keeping only the texture
    pub async fn fetch_texture(&self, provider: CapeProvider, player_id: &str) -> Option<Vec<u8>> {
        self.fetch(provider, player_id).await.into_texture()
    }

    /// Fetch the cape of the locally active player, by username
    pub async fn fetch_for_current_player(
        &self,
        provider: CapeProvider,
        session: &dyn SessionProvider,
    ) -> CapeFetch {
        let session = session.current_session();
        self.fetch(provider, &session.username).await
    }

    /// Single concrete provider lookup. `Ok(None)` means the service
    /// answered that the player has no cape.
    async fn fetch_from(&self, provider: CapeProvider, player_id: &str) -> AppResult<Option<Vec<u8>>> {
        let url = self.metadata_url(player_id, provider);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let metadata: CapeMetadata = serde_json::from_str(&body)?;
        if !metadata.exists {
            return Ok(None);
        }

        let image_url = metadata
            .image_url
            .ok_or_else(|| AppError::Cape("Cape exists but no imageUrl was given".to_string()))?;

        let image = self
            .client
            .get(&image_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(Some(image.to_vec()))
    }
}
