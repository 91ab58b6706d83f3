//! TMDB payloads, decoded straight into GraphQL output types
//!
//! Fields that need extra work (genre names, credits, videos, sub-resources)
//! are kept out of the derived schema with `#[graphql(skip)]` and exposed by
//! the `ComplexObject` resolvers in `crate::graphql::resolvers`, so nothing is
//! computed unless the field is selected.

use async_graphql::{SimpleObject, Union};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use super::language::MediaKind;

const YOUTUBE_SITE: &str = "YouTube";
const VIDEO_THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi";

// ============================================================================
// Shared building blocks
// ============================================================================

/// Genre catalog entry, also embedded in detail payloads
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Response of `genre/{kind}/list`
#[derive(Debug, Clone, Deserialize)]
pub struct GenreCatalog {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Any `{name}` entry (spoken languages, production countries)
#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// Appended sub-resources come back as `{results: [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsOf<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for ResultsOf<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct ProductionCompany {
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct Network {
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub id: i32,
    pub credit_id: Option<String>,
    pub name: String,
    pub gender: Option<i32>,
    pub profile_path: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub url: Option<String>,
    pub created_at: Option<String>,
}

// ============================================================================
// Media summaries
// ============================================================================

/// Movie as it appears in lists, search results and known-for entries
#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
#[graphql(complex)]
pub struct BaseMovie {
    pub id: i32,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub media_type: Option<String>,
    /// Character played, only on a person's credit entries
    pub character: Option<String>,
    #[graphql(skip)]
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// TV show as it appears in lists, search results and known-for entries
#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
#[graphql(name = "BaseTVShow", complex)]
pub struct BaseTvShow {
    pub id: i32,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub media_type: Option<String>,
    /// Character played, only on a person's credit entries
    pub character: Option<String>,
    #[graphql(skip)]
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Cross-media entry tagged by the upstream `media_type` field
#[derive(Union, Debug, Clone, PartialEq)]
pub enum MediaItem {
    Movie(BaseMovie),
    Tv(BaseTvShow),
}

impl MediaItem {
    /// Dispatch on `media_type`. Entries of any other kind, or entries that do
    /// not decode as their declared kind, yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        let kind = value
            .get("media_type")
            .and_then(Value::as_str)
            .and_then(MediaKind::from_media_type)?;

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let decoded = match kind {
            MediaKind::Movie => serde_json::from_value(value).map(Self::Movie),
            MediaKind::Tv => serde_json::from_value(value).map(Self::Tv),
        };

        decoded
            .map_err(|e| {
                warn!(
                    media_type = ?kind,
                    id = %id,
                    error = %e,
                    "Dropping media item that does not match its media_type"
                )
            })
            .ok()
    }
}

fn media_items<'de, D>(deserializer: D) -> Result<Vec<MediaItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(MediaItem::from_value).collect())
}

// ============================================================================
// People
// ============================================================================

/// Person as it appears in popular lists and search results
#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct BasePerson {
    pub id: i32,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub adult: Option<bool>,
    pub popularity: Option<f64>,
    pub known_for_department: Option<String>,
    #[serde(default, deserialize_with = "media_items")]
    pub known_for: Vec<MediaItem>,
}

/// Full person profile with their cast credits merged in
#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
#[graphql(complex)]
pub struct Person {
    pub id: i32,
    pub name: Option<String>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub gender: Option<i32>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub known_for_department: Option<String>,
    pub place_of_birth: Option<String>,
    pub popularity: Option<f64>,
    pub profile_path: Option<String>,
    pub adult: Option<bool>,
    /// Movies and TV shows the person appeared in
    #[serde(default, deserialize_with = "media_items")]
    pub cast: Vec<MediaItem>,
    #[graphql(skip)]
    #[serde(default)]
    pub images: ImageCollection,
}

/// Response of `person/{id}/combined_credits`
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedCredits {
    #[serde(default, deserialize_with = "media_items")]
    pub cast: Vec<MediaItem>,
}

// ============================================================================
// Credits, videos, images
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastItem>,
    #[serde(default)]
    pub crew: Vec<CrewItem>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct CastItem {
    pub id: i32,
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub gender: Option<i32>,
    pub order: Option<i32>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct CrewItem {
    pub id: i32,
    pub name: Option<String>,
    pub department: Option<String>,
    pub job: Option<String>,
    pub profile_path: Option<String>,
    pub gender: Option<i32>,
}

/// Video entry as TMDB returns it
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct VideoThumbnail {
    pub extra_small: String,
    pub small: String,
    pub medium: String,
    pub large: String,
    pub extra_large: String,
}

impl VideoThumbnail {
    fn for_youtube_key(key: &str) -> Self {
        let url = |file: &str| format!("{VIDEO_THUMBNAIL_BASE_URL}/{key}/{file}.jpg");
        Self {
            extra_small: url("default"),
            small: url("mqdefault"),
            medium: url("hqdefault"),
            large: url("sddefault"),
            extra_large: url("maxresdefault"),
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct MediaVideo {
    pub id: String,
    pub key: String,
    pub name: Option<String>,
    pub site: Option<String>,
    #[graphql(name = "type")]
    pub video_type: Option<String>,
    pub thumbnail: VideoThumbnail,
}

/// Keep YouTube videos only and synthesize their thumbnail URLs
pub fn youtube_videos(videos: &[Video]) -> Vec<MediaVideo> {
    videos
        .iter()
        .filter(|video| video.site.as_deref() == Some(YOUTUBE_SITE))
        .map(|video| MediaVideo {
            id: video.id.clone(),
            key: video.key.clone(),
            name: video.name.clone(),
            site: video.site.clone(),
            video_type: video.video_type.clone(),
            thumbnail: VideoThumbnail::for_youtube_key(&video.key),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageFile {
    pub file_path: String,
}

/// Response of `{movie,tv}/{id}/images`, also appended to person profiles
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageCollection {
    #[serde(default)]
    pub backdrops: Vec<ImageFile>,
    #[serde(default)]
    pub posters: Vec<ImageFile>,
    #[serde(default)]
    pub profiles: Vec<ImageFile>,
}

pub fn image_paths(images: &[ImageFile]) -> Vec<String> {
    images.iter().map(|image| image.file_path.clone()).collect()
}

// ============================================================================
// Details
// ============================================================================

/// Full movie record (`movie/{id}?append_to_response=videos,credits`)
#[derive(SimpleObject, Debug, Clone, Deserialize)]
#[graphql(name = "Movie", complex)]
pub struct MovieDetails {
    pub id: i32,
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub status: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i32>,
    pub budget: Option<f64>,
    pub revenue: Option<f64>,
    pub homepage: Option<String>,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[graphql(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[graphql(skip)]
    #[serde(default)]
    pub spoken_languages: Vec<NamedEntry>,
    #[graphql(skip)]
    #[serde(default)]
    pub production_countries: Vec<NamedEntry>,
    #[graphql(skip)]
    #[serde(default)]
    pub credits: Credits,
    #[graphql(skip)]
    #[serde(default)]
    pub videos: ResultsOf<Video>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonSummary {
    pub id: i32,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub episode_count: Option<i32>,
    pub season_number: i32,
    pub poster_path: Option<String>,
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Deserialize)]
pub struct Episode {
    pub id: i32,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub episode_number: Option<i32>,
    pub season_number: Option<i32>,
    pub production_code: Option<String>,
    pub show_id: Option<i32>,
    pub still_path: Option<String>,
    pub runtime: Option<i32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
}

/// Full TV show record (`tv/{id}?append_to_response=credits,similar,videos,reviews`)
#[derive(SimpleObject, Debug, Clone, Deserialize)]
#[graphql(name = "TVShow", complex)]
pub struct TvShowDetails {
    pub id: i32,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub original_language: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub homepage: Option<String>,
    pub in_production: Option<bool>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub episode_run_time: Vec<i32>,
    pub number_of_episodes: Option<i32>,
    pub number_of_seasons: Option<i32>,
    pub status: Option<String>,
    #[graphql(name = "type")]
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
    #[serde(default)]
    pub networks: Vec<Network>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    pub last_episode_to_air: Option<Episode>,
    pub next_episode_to_air: Option<Episode>,
    #[graphql(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[graphql(skip)]
    #[serde(default)]
    pub credits: Credits,
    #[graphql(skip)]
    #[serde(default)]
    pub similar: ResultsOf<BaseTvShow>,
    #[graphql(skip)]
    #[serde(default)]
    pub reviews: ResultsOf<Review>,
    #[graphql(skip)]
    #[serde(default)]
    pub videos: ResultsOf<Video>,
}

/// A single season (`tv/{id}/season/{n}?append_to_response=videos`)
#[derive(SimpleObject, Debug, Clone, Deserialize)]
#[graphql(name = "TVShowSeason", complex)]
pub struct TvSeason {
    pub id: i32,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub season_number: i32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[graphql(skip)]
    #[serde(default)]
    pub videos: ResultsOf<Video>,
}

// ============================================================================
// Search
// ============================================================================

#[derive(Union, Debug, Clone, PartialEq)]
pub enum SearchResultItem {
    Person(BasePerson),
    Movie(BaseMovie),
    Tv(BaseTvShow),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn kind_of(item: &MediaItem) -> MediaKind {
        match item {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Tv(_) => MediaKind::Tv,
        }
    }

    #[test]
    fn test_media_item_dispatches_on_media_type() {
        let movie = MediaItem::from_value(json!({
            "id": 550, "title": "Fight Club", "media_type": "movie", "genre_ids": [18]
        }))
        .unwrap();
        assert_eq!(kind_of(&movie), MediaKind::Movie);

        let tv = MediaItem::from_value(json!({
            "id": 1399, "name": "Game of Thrones", "media_type": "tv", "genre_ids": [10765]
        }))
        .unwrap();
        assert_eq!(kind_of(&tv), MediaKind::Tv);
        match tv {
            MediaItem::Tv(show) => {
                assert_eq!(show.name.as_deref(), Some("Game of Thrones"));
                assert_eq!(show.genre_ids, vec![10765]);
            }
            MediaItem::Movie(_) => panic!("expected a TV show"),
        }
    }

    #[test]
    fn test_media_item_skips_unknown_or_missing_kind() {
        assert_eq!(
            MediaItem::from_value(json!({ "id": 1, "media_type": "person" })),
            None
        );
        assert_eq!(MediaItem::from_value(json!({ "id": 1, "title": "x" })), None);
        assert_eq!(
            MediaItem::from_value(json!({ "id": "nope", "media_type": "movie" })),
            None
        );
    }

    #[test]
    fn test_known_for_filters_entries() {
        let person: BasePerson = serde_json::from_value(json!({
            "id": 287,
            "name": "Brad Pitt",
            "known_for": [
                { "id": 550, "media_type": "movie", "title": "Fight Club" },
                { "id": 3, "media_type": "person" },
                { "id": 1399, "media_type": "tv", "name": "GoT" }
            ]
        }))
        .unwrap();

        let kinds: Vec<MediaKind> = person.known_for.iter().map(kind_of).collect();
        assert_eq!(kinds, vec![MediaKind::Movie, MediaKind::Tv]);
    }

    #[test]
    fn test_entry_not_matching_its_media_type_is_dropped() {
        let item = MediaItem::from_value(json!({
            "id": "not-a-number", "media_type": "movie", "title": "Broken"
        }));
        assert_eq!(item, None);
    }

    #[test]
    fn test_null_known_for_is_empty() {
        let person: BasePerson =
            serde_json::from_value(json!({ "id": 1, "known_for": null })).unwrap();
        assert!(person.known_for.is_empty());
    }

    #[test]
    fn test_youtube_videos_filter_and_thumbnails() {
        let videos = vec![
            Video {
                id: "a1".to_string(),
                key: "abc".to_string(),
                name: Some("Trailer".to_string()),
                site: Some("YouTube".to_string()),
                video_type: Some("Trailer".to_string()),
            },
            Video {
                id: "b2".to_string(),
                key: "123".to_string(),
                name: None,
                site: Some("Vimeo".to_string()),
                video_type: None,
            },
        ];

        let shaped = youtube_videos(&videos);

        assert_eq!(shaped.len(), 1);
        let thumbnail = &shaped[0].thumbnail;
        assert_eq!(thumbnail.extra_small, "https://img.youtube.com/vi/abc/default.jpg");
        assert_eq!(thumbnail.small, "https://img.youtube.com/vi/abc/mqdefault.jpg");
        assert_eq!(thumbnail.medium, "https://img.youtube.com/vi/abc/hqdefault.jpg");
        assert_eq!(thumbnail.large, "https://img.youtube.com/vi/abc/sddefault.jpg");
        assert_eq!(
            thumbnail.extra_large,
            "https://img.youtube.com/vi/abc/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_movie_details_appended_resources_default_when_absent() {
        let movie: MovieDetails = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(movie.credits.cast.is_empty());
        assert!(movie.videos.results.is_empty());
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_tv_show_type_field() {
        let show: TvShowDetails =
            serde_json::from_value(json!({ "id": 1, "type": "Scripted" })).unwrap();
        assert_eq!(show.show_type.as_deref(), Some("Scripted"));
    }
}
