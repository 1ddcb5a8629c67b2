use crate::capes::CapeProvider;
use crate::presets::SkinPreset;
use crate::session::{PlayerSession, SessionProvider, SkinQueryService, SkinResourceLoader};
use crate::skins::Skin;

/// Build the preset a player starts with, named after the session username.
///
/// Offline sessions and accounts without a custom skin get the texture the
/// client already has locally. Authenticated accounts with a custom skin get
/// the remote skin URL and model reported by `skins`. A failed skin query is
/// logged and handled like a default skin.
pub async fn generate_default_preset(
    session: &dyn SessionProvider,
    skins: &dyn SkinQueryService,
    resources: &dyn SkinResourceLoader,
) -> SkinPreset {
    let session = session.current_session();

    if !session.authenticated {
        return local_preset(&session, resources);
    }

    let result = match skins.player_skin_texture(&session.uuid).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                player = %session.username,
                error = %e,
                "Skin query failed, using local skin"
            );
            return local_preset(&session, resources);
        }
    };

    match result.skin_url {
        Some(url) if !result.uses_default_skin => SkinPreset::with_details(
            Skin::from_url(url, result.model),
            session.username,
            Some(CapeProvider::Default),
        ),
        _ => local_preset(&session, resources),
    }
}

fn local_preset(session: &PlayerSession, resources: &dyn SkinResourceLoader) -> SkinPreset {
    let texture = resources.load_skin(session);
    SkinPreset::with_details(
        Skin::from_resource(texture),
        session.username.clone(),
        Some(CapeProvider::Default),
    )
}
