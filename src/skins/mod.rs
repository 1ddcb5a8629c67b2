pub mod mojang;

use serde::{Deserialize, Serialize};

pub use mojang::MojangSkinQuery;

/// Path segment marking slim-armed built-in skin textures
const SLIM_PATH_MARKER: &str = "/slim/";

/// Skin model (Steve vs Alex arm width)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkinModel {
    #[default]
    Default, // Steve (4px arms)
    Slim, // Alex (3px arms)
}

impl SkinModel {
    /// Parse a model type string reported by a skin service.
    /// Anything other than "slim" is the standard model.
    pub fn from_model_type(model: &str) -> Self {
        if model.eq_ignore_ascii_case("slim") {
            SkinModel::Slim
        } else {
            SkinModel::Default
        }
    }

    /// Infer the model from a built-in texture identifier path
    pub fn from_resource_path(path: &str) -> Self {
        if path.contains(SLIM_PATH_MARKER) {
            SkinModel::Slim
        } else {
            SkinModel::Default
        }
    }
}

impl std::fmt::Display for SkinModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinModel::Default => write!(f, "default"),
            SkinModel::Slim => write!(f, "slim"),
        }
    }
}

/// Reference to a skin texture. Treated as an immutable value: presets clone
/// it rather than mutating it in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Skin {
    /// Texture already known to the game client (built-in or cached locally)
    Resource { texture: String, model: SkinModel },
    /// Texture downloaded from a remote URL
    Url { url: String, model: SkinModel },
}

impl Skin {
    /// Build a resource skin, inferring the model from the texture path
    pub fn from_resource(texture: impl Into<String>) -> Self {
        let texture = texture.into();
        let model = SkinModel::from_resource_path(&texture);
        Skin::Resource { texture, model }
    }

    pub fn from_url(url: impl Into<String>, model: SkinModel) -> Self {
        Skin::Url {
            url: url.into(),
            model,
        }
    }

    pub fn model(&self) -> SkinModel {
        match self {
            Skin::Resource { model, .. } | Skin::Url { model, .. } => *model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_resource_path() {
        assert_eq!(
            SkinModel::from_resource_path("textures/entity/player/slim/alex.png"),
            SkinModel::Slim
        );
        assert_eq!(
            SkinModel::from_resource_path("textures/entity/player/wide/steve.png"),
            SkinModel::Default
        );
        // Marker must be a full path segment
        assert_eq!(
            SkinModel::from_resource_path("skins/slimshady.png"),
            SkinModel::Default
        );
    }

    #[test]
    fn test_model_from_model_type() {
        assert_eq!(SkinModel::from_model_type("slim"), SkinModel::Slim);
        assert_eq!(SkinModel::from_model_type("SLIM"), SkinModel::Slim);
        assert_eq!(SkinModel::from_model_type("default"), SkinModel::Default);
        assert_eq!(SkinModel::from_model_type("classic"), SkinModel::Default);
    }

    #[test]
    fn test_skin_serialization_is_tagged() {
        let skin = Skin::from_url("https://textures.minecraft.net/texture/abc", SkinModel::Slim);
        let json = serde_json::to_value(&skin).unwrap();
        assert_eq!(json["type"], "url");
        assert_eq!(json["url"], "https://textures.minecraft.net/texture/abc");
        assert_eq!(json["model"], "slim");

        let parsed: Skin = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, skin);
    }

    #[test]
    fn test_resource_skin_infers_model() {
        let skin = Skin::from_resource("minecraft:textures/entity/player/slim/alex.png");
        assert_eq!(skin.model(), SkinModel::Slim);
    }
}
