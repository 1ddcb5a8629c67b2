//! Contracts for the game client collaborators a preset factory depends on
//!
//! The host application owns the player session, the skin texture loader and
//! the network stack; this crate only sees them through these traits.

use crate::error::AppResult;
use crate::skins::SkinModel;
use uuid::Uuid;

/// Snapshot of the locally active player session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    pub username: String,
    pub uuid: Uuid,
    /// Whether the session is authenticated against the Mojang services
    pub authenticated: bool,
}

/// Accessor for the current player session
pub trait SessionProvider: Send + Sync {
    fn current_session(&self) -> PlayerSession;
}

/// Result of asking a skin service which skin a player currently wears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinQueryResult {
    pub uses_default_skin: bool,
    pub skin_url: Option<String>,
    pub model: SkinModel,
}

impl SkinQueryResult {
    pub fn default_skin() -> Self {
        Self {
            uses_default_skin: true,
            skin_url: None,
            model: SkinModel::Default,
        }
    }
}

/// Remote skin metadata lookup
#[async_trait::async_trait]
pub trait SkinQueryService: Send + Sync {
    async fn player_skin_texture(&self, uuid: &Uuid) -> AppResult<SkinQueryResult>;
}

/// Loader for the skin texture the client already has for a session.
/// Returns a path-like texture identifier (e.g. `minecraft:skins/slim/alex`).
pub trait SkinResourceLoader: Send + Sync {
    fn load_skin(&self, session: &PlayerSession) -> String;
}

/// Fixed session, mostly useful for offline tooling and tests
impl SessionProvider for PlayerSession {
    fn current_session(&self) -> PlayerSession {
        self.clone()
    }
}
