//! Search API data transfer objects.
//!
//! These mirror the iTunes Search response; convert to [`Track`] before use.

use serde::Deserialize;

use crate::library::{
    DEFAULT_ARTWORK, Track, TrackSource, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_GENRE,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub track_id: Option<u64>,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub primary_genre_name: Option<String>,
    /// ISO-8601 timestamp, e.g. `2019-03-01T12:00:00Z`.
    pub release_date: Option<String>,
    pub preview_url: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

impl SearchResult {
    /// Convert to a track; results without a preview URL have nothing to play.
    pub fn into_track(self) -> Option<Track> {
        let url = self.preview_url.filter(|u| !u.trim().is_empty())?;
        let format = url
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_uppercase())
            .filter(|ext| !ext.is_empty() && ext.len() <= 5)
            .unwrap_or_else(|| "AAC".to_string());

        Some(Track {
            id: self.track_id.unwrap_or_default(),
            title: self
                .track_name
                .unwrap_or_else(|| "Unknown Title".to_string()),
            artist: self
                .artist_name
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: self
                .collection_name
                .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            genre: self
                .primary_genre_name
                .unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
            year: self
                .release_date
                .map(|d| d.chars().take(4).collect())
                .unwrap_or_default(),
            duration: 0.0,
            format,
            artwork: self
                .artwork_url_100
                .unwrap_or_else(|| DEFAULT_ARTWORK.to_string()),
            source: TrackSource::Url(url),
        })
    }
}

impl SearchResponse {
    pub fn into_tracks(self) -> Vec<Track> {
        self.results
            .into_iter()
            .filter_map(SearchResult::into_track)
            .collect()
    }
}
