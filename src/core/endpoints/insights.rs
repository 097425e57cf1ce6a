//! Insights API: publisher domains and audience data.

use crate::core::endpoint::{Endpoint, HttpMethod, Param};
use crate::core::response::render;
use crate::domain::model::{PodcastAudienceResponse, PodcastDomainResponse};

pub static GET_PODCASTS_DOMAINS_DOMAIN_NAME: Endpoint = Endpoint {
    name: "get_podcasts_domains_domain_name",
    description: "Fetch podcasts by a publisher's domain name",
    method: HttpMethod::Get,
    path: "/podcasts/domains/{domain_name}",
    params: &[
        Param::path(
            "domain_name",
            "The domain name of a podcast publisher, e.g., nytimes.com, without http:// or www.",
        ),
        Param::number("page", "Page number of podcasts."),
    ],
    render: render::<PodcastDomainResponse>,
};

pub static GET_PODCASTS_ID_AUDIENCE: Endpoint = Endpoint {
    name: "get_podcasts_id_audience",
    description: "Fetch audience demographics for a podcast",
    method: HttpMethod::Get,
    path: "/podcasts/{id}/audience",
    params: &[Param::path(
        "id",
        "Podcast id. You can get podcast id from using other endpoints, e.g., `GET /search`, `GET /best_podcasts`...",
    )],
    render: render::<PodcastAudienceResponse>,
};
