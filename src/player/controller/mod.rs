pub mod common;
pub mod music;
pub mod spotify;

use crate::player::traits::{PlayerScripts, Source};

use music::MusicScripts;
use spotify::SpotifyScripts;

/// Script table for the given app.
pub fn scripts_for(source: Source) -> &'static dyn PlayerScripts {
    match source {
        Source::Library => &MusicScripts,
        Source::Streaming => &SpotifyScripts,
    }
}
