//! Search API.

use crate::core::endpoint::{Endpoint, HttpMethod, Param};
use crate::core::response::render;
use crate::domain::model::{
    RelatedSearchesResponse, SearchResponse, SpellCheckResponse, TrendingSearchesResponse,
    TypeaheadResponse,
};

const SEARCH_TERM: &str = "Search term, e.g., person, place, topic... You can use double quotes to do verbatim match, e.g., \"game of thrones\". Otherwise, it's fuzzy search.\n";

const LEN_MIN: &str = "Minimum audio length in minutes. Applicable only when **type** parameter is **episode** or **podcast**.\nIf **type** parameter is **episode**, it's for audio length of an episode.\nIf **type** parameter is **podcast**, it's for average audio length of all episodes in a podcast.\n";

const LEN_MAX: &str = "Maximum audio length in minutes. Applicable only when **type** parameter is **episode** or **podcast**.\nIf **type** parameter is **episode**, it's for audio length of an episode.\nIf **type** parameter is **podcast**, it's for average audio length of all episodes in a podcast.\n";

const FREQ_MIN: &str = "Minimum update frequency in hours (how frequently does a podcast release a new episode). For example, if you want to find \"weekly\" podcasts, then you can set **update_freq_min**=144 hours (or 6 days) and **update_freq_max**=192 hours (or 8 days). Applicable only when type parameter is **podcast**.\n";

const FREQ_MAX: &str = "Maximum update frequency in hours (how frequently does a podcast release a new episode). For example, if you want to find \"weekly\" podcasts, then you can set **update_freq_min**=144 hours (or 6 days) and **update_freq_max**=192 hours (or 8 days). Applicable only when type parameter is **podcast**.\n";

pub static GET_RELATED_SEARCHES: Endpoint = Endpoint {
    name: "get_related_searches",
    description: "Fetch related search terms",
    method: HttpMethod::Get,
    path: "/related_searches",
    params: &[
        Param::string("q", SEARCH_TERM).required(),
        Param::number(
            "safe_mode",
            "Whether or not to exclude search terms with explicit language. 1 is yes and 0 is no.\n",
        ),
    ],
    render: render::<RelatedSearchesResponse>,
};

pub static GET_TRENDING_SEARCHES: Endpoint = Endpoint {
    name: "get_trending_searches",
    description: "Fetch trending search terms",
    method: HttpMethod::Get,
    path: "/trending_searches",
    params: &[],
    render: render::<TrendingSearchesResponse>,
};

pub static GET_TYPEAHEAD: Endpoint = Endpoint {
    name: "get_typeahead",
    description: "Typeahead search",
    method: HttpMethod::Get,
    path: "/typeahead",
    params: &[
        Param::string("q", SEARCH_TERM).required(),
        Param::number(
            "show_podcasts",
            "Autosuggest podcasts. This only searches podcast title and publisher and returns very limited info of 5 podcasts. 1 is yes, 0 is no. It's a bit slow to autosuggest podcasts, so we turn it off by default. If show_podcasts=1, you can also pass iTunes id (e.g., 474722933) to the q parameter to fetch podcast meta data.\n",
        ),
        Param::number(
            "show_genres",
            "Whether or not to autosuggest genres. 1 is yes, 0 is no.\n",
        ),
        Param::number(
            "safe_mode",
            "Whether or not to exclude podcasts/episodes with explicit language. 1 is yes and 0 is no. It works only when **show_podcasts** is *1*.\n",
        ),
    ],
    render: render::<TypeaheadResponse>,
};

pub static GET_SPELLCHECK: Endpoint = Endpoint {
    name: "get_spellcheck",
    description: "Spell check on a search term",
    method: HttpMethod::Get,
    path: "/spellcheck",
    params: &[Param::string("q", SEARCH_TERM).required()],
    render: render::<SpellCheckResponse>,
};

pub static GET_SEARCH: Endpoint = Endpoint {
    name: "get_search",
    description: "Full-text search",
    method: HttpMethod::Get,
    path: "/search",
    params: &[
        Param::string("q", SEARCH_TERM).required(),
        Param::number(
            "sort_by_date",
            "Sort by date or not? If 0, then sort by relevance. If 1, then sort by date.\n",
        ),
        Param::string("type", "What type of contents do you want to search for? \n"),
        Param::number(
            "offset",
            "Offset for search results, for pagination. You'll use **next_offset** from response for this parameter.\n",
        ),
        Param::number("len_min", LEN_MIN),
        Param::number("len_max", LEN_MAX),
        Param::number(
            "episode_count_min",
            "Minimum number of episodes. Applicable only when type parameter is **podcast**.\n",
        ),
        Param::number(
            "episode_count_max",
            "Maximum number of episodes. Applicable only when type parameter is **podcast**.\n",
        ),
        Param::number("update_freq_min", FREQ_MIN),
        Param::number("update_freq_max", FREQ_MAX),
        Param::string(
            "genre_ids",
            "A comma-delimited string of a list of genre ids. If not specified, then all genres are included. You can find the id and the name of all genres from `GET /genres`. It works only when **type** is *episode* or *podcast*.\n",
        ),
        Param::number(
            "published_before",
            "Only show episodes/podcasts/curated lists published before this timestamp (in milliseconds). If **published_before** & **published_after** are used at the same time, **published_before** should be bigger than **published_after**.\n",
        ),
        Param::number(
            "published_after",
            "Only show episodes/podcasts/curated lists published after this timestamp (in milliseconds). If **published_before** & **published_after** are used at the same time, **published_before** should be bigger than **published_after**.\n",
        ),
        Param::string(
            "only_in",
            "A comma-delimited string to search only in specific fields. Allowed values are title, description, author, and audio. If not specified, then search every fields.\n",
        ),
        Param::string(
            "language",
            "Limit search results to a specific language. If not specified, it'll be any language. You can get a list of supported languages from `GET /languages`. It works only when **type** is *episode* or *podcast*.\n",
        ),
        Param::string(
            "region",
            "Limit search results to a specific region (e.g., us, gb, in...). If not specified, it'll be any region. You can get the supported country codes from `GET /regions`. It works only when **type** is *episode* or *podcast*.\n",
        ),
        Param::string(
            "ocid",
            "A comma-delimited string of podcast ids (up to 5 podcasts) - you can get a podcast id from the **podcast_id** field in response. This parameter is to limit search results from only a few specific podcasts. It works only when **type** is *episode*.\n",
        ),
        Param::string(
            "ncid",
            "A comma-delimited string of podcast ids (up to 5 podcasts) - you can get a podcast id from the **podcast_id** field in response. This parameter is to exclude search results of a few specific podcasts. It works only when **type** is *episode*.\n",
        ),
        Param::number(
            "safe_mode",
            "Whether or not to exclude podcasts/episodes with explicit language. 1 is yes and 0 is no. It works only when **type** is *episode* or *podcast*.\n",
        ),
        Param::number(
            "unique_podcasts",
            "Whether or not to keep only one episode per podcast in search results. 1 is yes and 0 is no. It works only when **type** is *episode*.\n",
        ),
        Param::number(
            "page_size",
            "The maximum number of search results per page. A valid value should be an integer between 1 and 10 (inclusive).\n",
        ),
    ],
    render: render::<SearchResponse>,
};
