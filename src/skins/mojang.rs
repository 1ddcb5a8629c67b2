use crate::error::{AppError, AppResult};
use crate::session::{SkinQueryResult, SkinQueryService};
use crate::skins::SkinModel;
use base64::Engine;
use serde::Deserialize;
use uuid::Uuid;

pub const MOJANG_SESSION_API: &str = "https://sessionserver.mojang.com";

/// Profile response from the Mojang session server
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[allow(dead_code)] // Deserialized but not used directly
    id: String,
    #[serde(default)]
    properties: Vec<ProfileProperty>,
}

#[derive(Debug, Deserialize)]
struct ProfileProperty {
    name: String,
    value: String,
}

/// Decoded `textures` property payload
#[derive(Debug, Deserialize)]
struct TexturesPayload {
    textures: TexturesInner,
}

#[derive(Debug, Deserialize)]
struct TexturesInner {
    #[serde(rename = "SKIN")]
    skin: Option<TextureSkin>,
}

#[derive(Debug, Deserialize)]
struct TextureSkin {
    url: String,
    metadata: Option<SkinMetadata>,
}

#[derive(Debug, Deserialize)]
struct SkinMetadata {
    model: String,
}

/// Skin metadata lookup backed by the public Mojang session server
#[derive(Debug, Clone)]
pub struct MojangSkinQuery {
    client: reqwest::Client,
    api_base: String,
}

impl MojangSkinQuery {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn profile_url(&self, uuid: &Uuid) -> String {
        format!(
            "{}/session/minecraft/profile/{}",
            self.api_base,
            uuid.simple()
        )
    }
}

#[async_trait::async_trait]
impl SkinQueryService for MojangSkinQuery {
    async fn player_skin_texture(&self, uuid: &Uuid) -> AppResult<SkinQueryResult> {
        let response = self
            .client
            .get(self.profile_url(uuid))
            .send()
            .await
            .map_err(|e| AppError::Skin(format!("Failed to fetch profile: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Skin(format!("Profile fetch failed ({})", status)));
        }

        let profile: ProfileResponse = response
            .json()
            .await
            .map_err(|e| AppError::Skin(format!("Failed to parse profile: {}", e)))?;

        let textures = match profile.properties.iter().find(|p| p.name == "textures") {
            Some(p) => decode_textures(&p.value)?,
            None => return Ok(SkinQueryResult::default_skin()),
        };

        Ok(match textures.textures.skin {
            Some(skin) => SkinQueryResult {
                uses_default_skin: false,
                skin_url: Some(skin.url),
                model: skin
                    .metadata
                    .map(|m| SkinModel::from_model_type(&m.model))
                    .unwrap_or_default(),
            },
            None => SkinQueryResult::default_skin(),
        })
    }
}

fn decode_textures(value: &str) -> AppResult<TexturesPayload> {
    let raw = base64::engine::general_purpose::STANDARD
        .decode(value)
        .map_err(|e| AppError::Skin(format!("Invalid textures property: {}", e)))?;
    Ok(serde_json::from_slice(&raw)?)
}
