use crate::capes::CapeFetcher;
use crate::config::SkinShuffleConfig;
use crate::error::AppResult;
use crate::skins::MojangSkinQuery;
use std::sync::Arc;

pub type SharedState = Arc<AppState>;

/// Long-lived services shared by everything that fetches skins or capes
pub struct AppState {
    pub config: SkinShuffleConfig,
    pub http_client: reqwest::Client,
    pub capes: CapeFetcher,
    pub skins: MojangSkinQuery,
}

impl AppState {
    /// Build the shared HTTP client and services from a validated config.
    /// No request timeouts are set beyond the client defaults.
    pub fn new(config: SkinShuffleConfig) -> AppResult<Self> {
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        let capes = CapeFetcher::from_config(http_client.clone(), &config);
        let skins = MojangSkinQuery::new(http_client.clone(), config.session_api_base.clone());

        Ok(Self {
            config,
            http_client,
            capes,
            skins,
        })
    }

    /// Load the config at `path` (or the platform default) and build the state
    pub async fn load(path: Option<&std::path::Path>) -> AppResult<Self> {
        let config = match path
            .map(std::path::Path::to_path_buf)
            .or_else(SkinShuffleConfig::default_path)
        {
            Some(path) => SkinShuffleConfig::load(&path).await?,
            None => {
                tracing::warn!("No config directory available, using defaults");
                SkinShuffleConfig::default()
            }
        };

        Self::new(config)
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
