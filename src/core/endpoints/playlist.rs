//! Playlist API. Only playlists owned by the API key's account are visible.

use crate::core::endpoint::{Endpoint, HttpMethod, Param};
use crate::core::response::render;
use crate::domain::model::{PlaylistResponse, PlaylistsResponse};

pub static GET_PLAYLISTS: Endpoint = Endpoint {
    name: "get_playlists",
    description: "Fetch a list of your playlists.",
    method: HttpMethod::Get,
    path: "/playlists",
    params: &[
        Param::string("sort", "How do you want to sort playlists?\n"),
        Param::number("page", "Page number of playlists."),
    ],
    render: render::<PlaylistsResponse>,
};

pub static GET_PLAYLISTS_ID: Endpoint = Endpoint {
    name: "get_playlists_id",
    description: "Fetch a playlist's info and items (i.e., episodes or podcasts).",
    method: HttpMethod::Get,
    path: "/playlists/{id}",
    params: &[
        Param::path(
            "id",
            "Playlist id (always 11 characters, e.g., m1pe7z60bsw).\nYou can get the podcast id from the url of a playlist, e.g.,\nm1pe7z60bsw is the playlist id of listennotes.com/listen/podcasts-about-podcasting-m1pe7z60bsw\n",
        ),
        Param::string(
            "type",
            "The type of this playlist, which should be either **episode_list** or **podcast_list**.\n",
        ),
        Param::number(
            "last_timestamp_ms",
            "For playlist items pagination.\nIt's the value of **last_timestamp_ms** from the response of last request.\nIf it's 0 or not specified, just return the latest or the oldest 20 items,\ndepending on the value of the **sort** parameter.\n",
        ),
        Param::string("sort", "How do you want to sort playlist items?\n"),
    ],
    render: render::<PlaylistResponse>,
};
