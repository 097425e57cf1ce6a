//! ListenNotes 回應結構。
//!
//! 每個欄位都是 `Option`，缺少的欄位在輸出時直接省略，
//! 因此 decode 之後再 encode 不會憑空多出 null 或預設值。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_previous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// What the podcaster is looking for (cohosts, guests...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastLookingFor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohosts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_promotion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<bool>,
}

/// Social handles and external links of a podcast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patreon_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_music_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url3: Option<String>,
}

/// 最精簡的 podcast 資訊，常見於 episode 內嵌與 curated list。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastMinimum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    /// Only available in the PRO/ENTERPRISE plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_score: Option<i64>,
    /// e.g. "0.5%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_score_global_rank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastSimple {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    /// Only available in the PRO/ENTERPRISE plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// "episodic" or "serial".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunes_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_length_sec: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_frequency_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_episode_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_pub_date_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_pub_date_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_claimed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_score_global_rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<PodcastLookingFor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<PodcastExtra>,
}

/// `GET /podcasts/{id}`：podcast 基本資料加上一頁 episodes。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastFull {
    #[serde(flatten)]
    pub podcast: PodcastSimple,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<EpisodeMinimum>>,
    /// Cursor for the next page of episodes. Pass it back as `next_episode_pub_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_episode_pub_date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastTypeaheadResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_highlighted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_highlighted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMinimum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_length_sec: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maybe_audio_invalid: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSimple {
    #[serde(flatten)]
    pub episode: EpisodeMinimum,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast: Option<PodcastMinimum>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeFull {
    #[serde(flatten)]
    pub episode: EpisodeMinimum,
    /// Plain text, PRO/ENTERPRISE only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast: Option<PodcastSimple>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuratedListSimple {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    /// Up to 5 podcasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcasts: Option<Vec<PodcastMinimum>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuratedListFull {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcasts: Option<Vec<PodcastSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// "episode", "custom_audio" or "podcast".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at_ms: Option<i64>,
    /// 形狀依 `type` 而定，原樣保留
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// ---- 各端點的回應 ----

/// `GET /search`. `results` holds episodes, podcasts or curated lists depending
/// on the requested `type`, so items are kept untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// 秒數；保留原始數字字面值（`1` 不變成 `1.0`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub took: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeaheadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    /// Present when `show_genres=1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    /// Present when `show_podcasts=1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcasts: Option<Vec<PodcastTypeaheadResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellCheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_text_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedSearchesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingSearchesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestPodcastsResponse {
    /// Genre id of this list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcasts: Option<Vec<PodcastSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetCuratedPodcastsResponse {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated_lists: Option<Vec<CuratedListSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetGenresResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetLanguagesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

/// Country code → country name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRegionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPodcastRecommendationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<PodcastSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetEpisodeRecommendationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<EpisodeSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastAudienceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_regions: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastDomainResponse {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcasts: Option<Vec<PodcastSimple>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listennotes_url: Option<String>,
    /// "episode_list" or "podcast_list".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_audio_length_sec: Option<i64>,
    /// Cursor for the next page of items. Pass it back as `last_timestamp_ms`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_timestamp_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<PlaylistItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Vec<Map<String, Value>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePodcastResponse {
    /// "deleted" or "in review"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
