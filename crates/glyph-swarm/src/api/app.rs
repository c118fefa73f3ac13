use crate::api::config::SwarmConfig;
use crate::assets::playlist::Playlist;

/// The contract a swarm application fulfills for the host runner.
///
/// Both hooks are read once, when the runner builds its [`Swarm`](crate::Swarm).
pub trait SwarmApp {
    /// Motion, glyph and timing configuration (default: the settling swarm).
    fn config(&self) -> SwarmConfig {
        SwarmConfig::default()
    }

    /// Content to cycle through (default: the word/silhouette pairs).
    fn playlist(&self) -> Playlist {
        Playlist::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::playlist::ContentItem;

    struct Defaults;
    impl SwarmApp for Defaults {}

    struct Custom;
    impl SwarmApp for Custom {
        fn config(&self) -> SwarmConfig {
            SwarmConfig::default().with_grid_pitch(4)
        }

        fn playlist(&self) -> Playlist {
            Playlist::new(vec![ContentItem::text("HI")])
        }
    }

    #[test]
    fn defaults_are_used_when_not_overridden() {
        assert_eq!(Defaults.config(), SwarmConfig::default());
        assert_eq!(Defaults.playlist(), Playlist::default());
    }

    #[test]
    fn overrides_win() {
        assert_eq!(Custom.config().grid_pitch, 4);
        assert_eq!(Custom.playlist().len(), 1);
    }
}
