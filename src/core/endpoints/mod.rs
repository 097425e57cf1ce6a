pub mod directory;
pub mod insights;
pub mod playlist;
pub mod podcaster;
pub mod search;

use crate::core::endpoint::Endpoint;

/// 所有端點，順序即 tools/list 的順序
pub fn all() -> [&'static Endpoint; 21] {
    [
        &insights::GET_PODCASTS_DOMAINS_DOMAIN_NAME,
        &search::GET_RELATED_SEARCHES,
        &directory::GET_CURATED_PODCASTS_ID,
        &directory::GET_CURATED_PODCASTS,
        &directory::GET_JUST_LISTEN,
        &podcaster::DELETE_PODCASTS_ID,
        &directory::GET_PODCASTS_ID,
        &playlist::GET_PLAYLISTS,
        &search::GET_TRENDING_SEARCHES,
        &directory::GET_EPISODES_ID,
        &playlist::GET_PLAYLISTS_ID,
        &directory::GET_REGIONS,
        &directory::GET_GENRES,
        &directory::GET_LANGUAGES,
        &insights::GET_PODCASTS_ID_AUDIENCE,
        &directory::GET_PODCASTS_ID_RECOMMENDATIONS,
        &search::GET_TYPEAHEAD,
        &search::GET_SPELLCHECK,
        &directory::GET_EPISODES_ID_RECOMMENDATIONS,
        &directory::GET_BEST_PODCASTS,
        &search::GET_SEARCH,
    ]
}

pub fn find(name: &str) -> Option<&'static Endpoint> {
    all().into_iter().find(|endpoint| endpoint.name == name)
}
