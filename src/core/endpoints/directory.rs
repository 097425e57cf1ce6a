//! Directory API: podcasts, episodes, curated lists and the lookup tables.

use crate::core::endpoint::{Endpoint, HttpMethod, Param};
use crate::core::response::render;
use crate::domain::model::*;

const PODCAST_ID: &str =
    "Podcast id. You can get podcast id from using other endpoints, e.g., `GET /search`, `GET /best_podcasts`...";

pub static GET_CURATED_PODCASTS_ID: Endpoint = Endpoint {
    name: "get_curated_podcasts_id",
    description: "Fetch a curated list of podcasts by id",
    method: HttpMethod::Get,
    path: "/curated_podcasts/{id}",
    params: &[Param::path(
        "id",
        "id for a specific curated list of podcasts. You can get the id from the response of `GET /search?type=curated` or `GET /curated_podcasts`.\n",
    )],
    render: render::<CuratedListFull>,
};

pub static GET_CURATED_PODCASTS: Endpoint = Endpoint {
    name: "get_curated_podcasts",
    description: "Fetch curated lists of podcasts",
    method: HttpMethod::Get,
    path: "/curated_podcasts",
    params: &[Param::number("page", "Page number of curated lists.")],
    render: render::<GetCuratedPodcastsResponse>,
};

pub static GET_JUST_LISTEN: Endpoint = Endpoint {
    name: "get_just_listen",
    description: "Fetch a random podcast episode",
    method: HttpMethod::Get,
    path: "/just_listen",
    params: &[],
    render: render::<EpisodeSimple>,
};

pub static GET_PODCASTS_ID: Endpoint = Endpoint {
    name: "get_podcasts_id",
    description: "Fetch detailed meta data and episodes for a podcast by id",
    method: HttpMethod::Get,
    path: "/podcasts/{id}",
    params: &[
        Param::path("id", PODCAST_ID),
        Param::number(
            "next_episode_pub_date",
            "For episodes pagination. It's the value of **next_episode_pub_date** from the response of last request. If not specified, just return latest 10 episodes or oldest 10 episodes, depending on the value of the **sort** parameter.\n",
        ),
        Param::string("sort", "How do you want to sort the episodes of this podcast?\n"),
    ],
    render: render::<PodcastFull>,
};

pub static GET_EPISODES_ID: Endpoint = Endpoint {
    name: "get_episodes_id",
    description: "Fetch detailed meta data for an episode by id",
    method: HttpMethod::Get,
    path: "/episodes/{id}",
    params: &[
        Param::path(
            "id",
            "Episode id. You can get episode id from using other endpoints, e.g., `GET /search`, `GET /podcasts/{id}`...",
        ),
        Param::number(
            "show_transcript",
            "To include the transcript of this episode or not? If 1, then include. If 0, then don't include.\n",
        ),
    ],
    render: render::<EpisodeFull>,
};

pub static GET_REGIONS: Endpoint = Endpoint {
    name: "get_regions",
    description: "Fetch a list of supported countries/regions for best podcasts",
    method: HttpMethod::Get,
    path: "/regions",
    params: &[],
    render: render::<GetRegionsResponse>,
};

pub static GET_GENRES: Endpoint = Endpoint {
    name: "get_genres",
    description: "Fetch a list of podcast genres",
    method: HttpMethod::Get,
    path: "/genres",
    params: &[Param::number(
        "top_level_only",
        "Just show top level genres? If 1, then yes. If 0, then no.\n",
    )],
    render: render::<GetGenresResponse>,
};

pub static GET_LANGUAGES: Endpoint = Endpoint {
    name: "get_languages",
    description: "Fetch a list of supported languages for podcasts",
    method: HttpMethod::Get,
    path: "/languages",
    params: &[],
    render: render::<GetLanguagesResponse>,
};

pub static GET_PODCASTS_ID_RECOMMENDATIONS: Endpoint = Endpoint {
    name: "get_podcasts_id_recommendations",
    description: "Fetch recommendations for a podcast",
    method: HttpMethod::Get,
    path: "/podcasts/{id}/recommendations",
    params: &[
        Param::path("id", PODCAST_ID),
        Param::number(
            "safe_mode",
            "Whether or not to exclude podcasts with explicit language. 1 is yes, and 0 is no.",
        ),
    ],
    render: render::<GetPodcastRecommendationsResponse>,
};

pub static GET_EPISODES_ID_RECOMMENDATIONS: Endpoint = Endpoint {
    name: "get_episodes_id_recommendations",
    description: "Fetch recommendations for an episode",
    method: HttpMethod::Get,
    path: "/episodes/{id}/recommendations",
    params: &[
        Param::path(
            "id",
            "Episode id. You can get episode id from using other endpoints, e.g., `GET /search`, `GET /podcasts/{id}`...",
        ),
        Param::number(
            "safe_mode",
            "Whether or not to exclude episodes with explicit language. 1 is yes, and 0 is no.",
        ),
    ],
    render: render::<GetEpisodeRecommendationsResponse>,
};

pub static GET_BEST_PODCASTS: Endpoint = Endpoint {
    name: "get_best_podcasts",
    description: "Fetch a list of best podcasts by genre",
    method: HttpMethod::Get,
    path: "/best_podcasts",
    params: &[
        Param::string(
            "genre_id",
            "You can get the id from `GET /genres`. If not specified, it'll be the overall best podcasts, which can be considered as a special genre.",
        ),
        Param::number("page", "Page number of those podcasts in this genre."),
        Param::string(
            "region",
            "Filter best podcasts by country/region.\nPlease note that podcasts that are \"best\" in a country/region may not be produced in that country/region.\nFor example, a podcast from the US may be very popular in Canada.\nYou can get the supported country codes (e.g., us, jp, gb...) from `GET /regions`.\nIf not specified, you'll get \"best podcasts\" in United States.\n",
        ),
        Param::string(
            "publisher_region",
            "Filter best podcasts by the publisher's country/region.\nThis is to narrow down the results to include \"best podcasts\" produced in a specific country/region.\nYou can get the supported country codes (e.g., us, jp, gb...) from `GET /regions`.\nIf not specified, you'll get \"best podcasts\" produced in any country/region.\nIf you want to get a country/region's \"best podcasts\" that are also produced in that country/region,\nthen you need to specify both **region** and **publisher_region**,\ne.g., `region=jp` and `publisher_region=jp`.\n",
        ),
        Param::string(
            "language",
            "Filter best podcasts by language.\nYou can get a list of supported languages (e.g., English, Chinese, Japanese...) from `GET /languages`.\nIf not specified, you'll get \"best podcasts\" in any language.\n",
        ),
        Param::string(
            "sort",
            "How do you want to sort these podcasts?\nIf you'd like to sort by popularity, please use **listen_score**.\n",
        ),
        Param::number(
            "safe_mode",
            "Whether or not to exclude podcasts with explicit language. 1 is yes, and 0 is no.",
        ),
    ],
    render: render::<BestPodcastsResponse>,
};
