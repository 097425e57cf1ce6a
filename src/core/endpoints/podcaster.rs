use crate::core::endpoint::{Endpoint, HttpMethod, Param};
use crate::core::response::render;
use crate::domain::model::DeletePodcastResponse;

/// 刪除請求會進入人工審核，`reason` 填 "testing" 時不會真的刪除
pub static DELETE_PODCASTS_ID: Endpoint = Endpoint {
    name: "delete_podcasts_id",
    description: "Request to delete a podcast",
    method: HttpMethod::Delete,
    path: "/podcasts/{id}",
    params: &[
        Param::path(
            "id",
            "Podcast id. You can get podcast id from using other endpoints, e.g., `GET /search`, `GET /best_podcasts`...",
        ),
        Param::string(
            "reason",
            "The reason why this podcast should be deleted, e.g., copyright violation, the podcaster wants to delete it... You can put \"testing\" here to indicate that you are testing this endpoint, so we will not actually delete the podcast.",
        ),
    ],
    render: render::<DeletePodcastResponse>,
};
