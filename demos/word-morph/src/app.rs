use glyph_swarm::{Playlist, SwarmApp, SwarmConfig};

const PLAYLIST_JSON: &str = include_str!("../playlist.json");

pub struct WordMorph {
    playlist: Playlist,
}

impl WordMorph {
    pub fn new() -> Self {
        let playlist = match Playlist::from_json(PLAYLIST_JSON) {
            Ok(playlist) if !playlist.is_empty() => playlist,
            Ok(_) => {
                log::warn!("playlist.json is empty, using the built-in playlist");
                Playlist::default()
            }
            Err(e) => {
                log::warn!("failed to parse playlist.json: {}", e);
                Playlist::default()
            }
        };
        Self { playlist }
    }
}

impl SwarmApp for WordMorph {
    fn config(&self) -> SwarmConfig {
        SwarmConfig::default()
    }

    fn playlist(&self) -> Playlist {
        self.playlist.clone()
    }
}
