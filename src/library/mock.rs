use super::model::{DEFAULT_ARTWORK, Track, TrackSource};

/// The built-in demo playlist. These entries carry metadata only.
pub fn mock_playlist() -> Vec<Track> {
    vec![
        Track {
            id: 1,
            title: "Midnight Dreams".to_string(),
            artist: "Luna Eclipse".to_string(),
            album: "Cosmic Journey".to_string(),
            genre: "Electronic".to_string(),
            year: "2024".to_string(),
            duration: 245.0,
            format: "MP3".to_string(),
            artwork: DEFAULT_ARTWORK.to_string(),
            source: TrackSource::None,
        },
        Track {
            id: 2,
            title: "Ocean Waves".to_string(),
            artist: "Serene Sounds".to_string(),
            album: "Nature's Symphony".to_string(),
            genre: "Ambient".to_string(),
            year: "2023".to_string(),
            duration: 312.0,
            format: "WAV".to_string(),
            artwork: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&h=400&fit=crop"
                .to_string(),
            source: TrackSource::None,
        },
        Track {
            id: 3,
            title: "Urban Pulse".to_string(),
            artist: "City Lights".to_string(),
            album: "Metropolitan".to_string(),
            genre: "Hip Hop".to_string(),
            year: "2024".to_string(),
            duration: 198.0,
            format: "MP3".to_string(),
            artwork: DEFAULT_ARTWORK.to_string(),
            source: TrackSource::None,
        },
    ]
}
