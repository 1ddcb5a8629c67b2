//! User configuration
//!
//! Stored as JSON next to the other SkinShuffle files. Every field has a
//! default so a missing or partial file is always usable.

use crate::capes::fetch::CAPES_DEV_API;
use crate::capes::CapeProvider;
use crate::error::{AppError, AppResult};
use crate::skins::mojang::MOJANG_SESSION_API;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkinShuffleConfig {
    /// Base URL of the capes.dev compatible cape service
    pub cape_api_base: String,
    /// Base URL of the Mojang session server
    pub session_api_base: String,
    /// Order the default cape provider tries concrete providers in.
    /// Must list every concrete provider exactly once.
    pub cape_fallback_order: Vec<CapeProvider>,
    pub user_agent: String,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
    /// Directory for rolling log files, console only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for SkinShuffleConfig {
    fn default() -> Self {
        Self {
            cape_api_base: CAPES_DEV_API.to_string(),
            session_api_base: MOJANG_SESSION_API.to_string(),
            cape_fallback_order: CapeProvider::CONCRETE.to_vec(),
            user_agent: format!("SkinShuffle/{}", env!("CARGO_PKG_VERSION")),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl SkinShuffleConfig {
    /// Default config location in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mineblock11", "skinshuffle")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub async fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_base_url("cape_api_base", &self.cape_api_base)?;
        validate_base_url("session_api_base", &self.session_api_base)?;

        let mut seen = HashSet::new();
        for provider in &self.cape_fallback_order {
            if provider.is_default() {
                return Err(AppError::Config(
                    "cape_fallback_order cannot contain \"default\"".to_string(),
                ));
            }
            if !seen.insert(*provider) {
                return Err(AppError::Config(format!(
                    "cape_fallback_order lists \"{}\" more than once",
                    provider
                )));
            }
        }

        if let Some(missing) = CapeProvider::CONCRETE
            .iter()
            .find(|p| !seen.contains(*p))
        {
            return Err(AppError::Config(format!(
                "cape_fallback_order must list every cape provider, \"{}\" is missing",
                missing
            )));
        }

        Ok(())
    }
}

fn validate_base_url(field: &str, value: &str) -> AppResult<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", field, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::Config(format!(
            "{} must use http or https, got {}",
            field, scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = SkinShuffleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.cape_fallback_order,
            vec![
                CapeProvider::Mojang,
                CapeProvider::Optifine,
                CapeProvider::MinecraftCapes
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SkinShuffleConfig::load(&dir.path().join("config.json"))
            .await
            .unwrap();
        assert_eq!(config, SkinShuffleConfig::default());
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(
            &path,
            r#"{ "cape_fallback_order": ["optifine", "minecraftcapes", "minecraft"] }"#,
        )
        .await
        .unwrap();

        let config = SkinShuffleConfig::load(&path).await.unwrap();

        assert_eq!(
            config.cape_fallback_order,
            vec![
                CapeProvider::Optifine,
                CapeProvider::MinecraftCapes,
                CapeProvider::Mojang
            ]
        );
        assert_eq!(config.cape_api_base, CAPES_DEV_API);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = SkinShuffleConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };

        config.save(&path).await.unwrap();
        let loaded = SkinShuffleConfig::load(&path).await.unwrap();

        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_unknown_provider_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{ "cape_fallback_order": ["labymod"] }"#)
            .await
            .unwrap();

        let err = SkinShuffleConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_default_in_fallback_order_rejected() {
        let config = SkinShuffleConfig {
            cape_fallback_order: vec![CapeProvider::Default],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_duplicate_in_fallback_order_rejected() {
        let config = SkinShuffleConfig {
            cape_fallback_order: vec![CapeProvider::Optifine, CapeProvider::Optifine],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_incomplete_fallback_order_rejected() {
        for order in [vec![], vec![CapeProvider::Optifine]] {
            let config = SkinShuffleConfig {
                cape_fallback_order: order,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(AppError::Config(_))));
        }
    }

    #[tokio::test]
    async fn test_incomplete_fallback_order_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{ "cape_fallback_order": [] }"#)
            .await
            .unwrap();

        let err = SkinShuffleConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let config = SkinShuffleConfig {
            cape_api_base: "ftp://capes.example".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = SkinShuffleConfig {
            session_api_base: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
