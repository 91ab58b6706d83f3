//! Locale and media-kind tags shared by every TMDB handler

use async_graphql::Enum;

/// Supported locales. Absence of a tag means "let the upstream decide",
/// except where a handler applies [`Language::default`] explicitly.
#[derive(Enum, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[graphql(name = "ISO6391Language")]
pub enum Language {
    #[default]
    #[graphql(name = "ENUS")]
    EnUs,
    #[graphql(name = "ENGB")]
    EnGb,
    #[graphql(name = "PTBR")]
    PtBr,
    #[graphql(name = "PTPT")]
    PtPt,
    #[graphql(name = "ESES")]
    EsEs,
    #[graphql(name = "ESMX")]
    EsMx,
    #[graphql(name = "FRFR")]
    FrFr,
    #[graphql(name = "DEDE")]
    DeDe,
    #[graphql(name = "ITIT")]
    ItIt,
    #[graphql(name = "JAJP")]
    JaJp,
    #[graphql(name = "KOKR")]
    KoKr,
    #[graphql(name = "ZHCN")]
    ZhCn,
}

impl Language {
    /// Locale string in the exact form the upstream expects (`pt-br`)
    pub fn locale(self) -> &'static str {
        match self {
            Self::EnUs => "en-us",
            Self::EnGb => "en-gb",
            Self::PtBr => "pt-br",
            Self::PtPt => "pt-pt",
            Self::EsEs => "es-es",
            Self::EsMx => "es-mx",
            Self::FrFr => "fr-fr",
            Self::DeDe => "de-de",
            Self::ItIt => "it-it",
            Self::JaJp => "ja-jp",
            Self::KoKr => "ko-kr",
            Self::ZhCn => "zh-cn",
        }
    }
}

/// Media kinds that own a genre catalog and an endpoint family
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Parse the upstream `media_type` discriminator. Anything else
    /// (`person`, empty, garbage) is not a media kind.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }

    pub fn genre_endpoint(self) -> &'static str {
        match self {
            Self::Movie => "genre/movie/list",
            Self::Tv => "genre/tv/list",
        }
    }
}
