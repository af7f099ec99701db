use super::controller::common::AutomationScript;
use super::request::PlayerRequest;

/// The two desktop apps the bridge can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Local library app ("Music", formerly iTunes / "Apple Music")
    Library,
    /// Streaming client
    Streaming,
}

impl Source {
    /// Map the `source` request field. Empty or unknown values are `None`.
    pub fn from_field(value: &str) -> Option<Self> {
        match value.trim() {
            "Music" | "Apple Music" => Some(Self::Library),
            "Spotify" => Some(Self::Streaming),
            _ => None,
        }
    }

    /// Application name as AppleScript knows it.
    pub fn app_name(&self) -> &'static str {
        match self {
            Self::Library => "Music",
            Self::Streaming => "Spotify",
        }
    }
}

/// Transport controls. Run for their side effect only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Previous,
    Next,
    Stop,
    Play,
    PlayPause,
    Shuffle,
    NoShuffle,
    Repeat,
    NoRepeat,
}

/// List queries. Output is `"a","b",...` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Artists,
    Albums,
    AlbumTracks,
    Playlists,
    PlaylistTracks,
    Tracks,
    Genres,
    GenreArtists,
}

/// Start playback of a specific selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaySelection {
    Track,
    Album,
    Playlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Transport(Transport),
    Query(Query),
    Play(PlaySelection),
}

impl Action {
    /// Parse the `action` request field. Names are matched exactly, like
    /// `source`; unknown names are treated as empty.
    pub fn from_field(value: &str) -> Option<Self> {
        let action = match value.trim() {
            "previous" => Self::Transport(Transport::Previous),
            "next" => Self::Transport(Transport::Next),
            "stop" => Self::Transport(Transport::Stop),
            "play" => Self::Transport(Transport::Play),
            "playpause" => Self::Transport(Transport::PlayPause),
            "shuffle" => Self::Transport(Transport::Shuffle),
            "noshuffle" | "unshuffle" => Self::Transport(Transport::NoShuffle),
            "repeat" => Self::Transport(Transport::Repeat),
            "norepeat" | "unrepeat" => Self::Transport(Transport::NoRepeat),
            "artists" => Self::Query(Query::Artists),
            "albums" => Self::Query(Query::Albums),
            "albumtracks" => Self::Query(Query::AlbumTracks),
            "playlists" => Self::Query(Query::Playlists),
            "playlisttracks" => Self::Query(Query::PlaylistTracks),
            "tracks" => Self::Query(Query::Tracks),
            "genres" => Self::Query(Query::Genres),
            "genreartists" => Self::Query(Query::GenreArtists),
            "playtrack" => Self::Play(PlaySelection::Track),
            "playalbum" => Self::Play(PlaySelection::Album),
            "playplaylist" => Self::Play(PlaySelection::Playlist),
            _ => return None,
        };
        Some(action)
    }

    /// Canonical command name, echoed back in acknowledgements.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transport(t) => match t {
                Transport::Previous => "previous",
                Transport::Next => "next",
                Transport::Stop => "stop",
                Transport::Play => "play",
                Transport::PlayPause => "playpause",
                Transport::Shuffle => "shuffle",
                Transport::NoShuffle => "noshuffle",
                Transport::Repeat => "repeat",
                Transport::NoRepeat => "norepeat",
            },
            Self::Query(q) => match q {
                Query::Artists => "artists",
                Query::Albums => "albums",
                Query::AlbumTracks => "albumtracks",
                Query::Playlists => "playlists",
                Query::PlaylistTracks => "playlisttracks",
                Query::Tracks => "tracks",
                Query::Genres => "genres",
                Query::GenreArtists => "genreartists",
            },
            Self::Play(p) => match p {
                PlaySelection::Track => "playtrack",
                PlaySelection::Album => "playalbum",
                PlaySelection::Playlist => "playplaylist",
            },
        }
    }
}

/// Script table for one app. `None` means the app has no script for that
/// command and nothing should run.
pub trait PlayerScripts: Send + Sync {
    fn source(&self) -> Source;
    fn transport(&self, action: Transport) -> AutomationScript;
    fn query(&self, query: Query, request: &PlayerRequest) -> Option<AutomationScript>;
    fn play(&self, selection: PlaySelection, request: &PlayerRequest) -> Option<AutomationScript>;
    /// Current-track probe used by `check-automation`.
    fn probe(&self) -> AutomationScript;
}
