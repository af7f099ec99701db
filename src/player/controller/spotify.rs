use super::common::AutomationScript;
use crate::player::request::PlayerRequest;
use crate::player::traits::{Action, PlayerScripts, PlaySelection, Query, Source, Transport};

const APP: &str = "Spotify";

// Shuffle and repeat travel together on Spotify.
const SHUFFLE_ON: &str = r#"
tell application "Spotify"
    if shuffling is false then
        set shuffling to true
        if repeating is false then
            set repeating to true
        end if
    end if
end tell
"#;

const SHUFFLE_OFF: &str = r#"
tell application "Spotify"
    if shuffling is true then
        set shuffling to false
        if repeating is true then
            set repeating to false
        end if
    end if
end tell
"#;

// argv: URI, then the command name to echo.
const PLAY_URI: &str = r#"
on run argv
    tell application "Spotify"
        play track (item 1 of argv)
    end tell
    return item 2 of argv
end run
"#;

const PROBE: &str = r#"
tell application "Spotify"
    if player state is stopped then return "stopped"
    return (artist of current track) & " - " & (name of current track)
end tell
"#;

/// Script table for the streaming client. It has no library to query.
pub struct SpotifyScripts;

impl PlayerScripts for SpotifyScripts {
    fn source(&self) -> Source {
        Source::Streaming
    }

    fn transport(&self, action: Transport) -> AutomationScript {
        match action {
            Transport::Previous => AutomationScript::tell(APP, "previous track"),
            Transport::Next => AutomationScript::tell(APP, "next track"),
            Transport::Stop => AutomationScript::tell(APP, "pause"),
            Transport::Play => AutomationScript::tell(APP, "play"),
            Transport::PlayPause => AutomationScript::tell(APP, "playpause"),
            Transport::Shuffle => AutomationScript::new(SHUFFLE_ON),
            Transport::NoShuffle => AutomationScript::new(SHUFFLE_OFF),
            Transport::Repeat => AutomationScript::tell(APP, "set repeating to true"),
            Transport::NoRepeat => AutomationScript::tell(APP, "set repeating to false"),
        }
    }

    fn query(&self, _query: Query, _request: &PlayerRequest) -> Option<AutomationScript> {
        None
    }

    /// `search` carries a `spotify:` URI; Spotify resolves tracks and
    /// playlists alike through `play track`.
    fn play(&self, selection: PlaySelection, request: &PlayerRequest) -> Option<AutomationScript> {
        match selection {
            PlaySelection::Track | PlaySelection::Playlist => Some(
                AutomationScript::new(PLAY_URI)
                    .arg(&request.search)
                    .arg(Action::Play(selection).name()),
            ),
            PlaySelection::Album => None,
        }
    }

    fn probe(&self) -> AutomationScript {
        AutomationScript::new(PROBE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_also_enables_repeat() {
        let script = SpotifyScripts.transport(Transport::Shuffle);
        assert!(script.source.contains("set shuffling to true"));
        assert!(script.source.contains("set repeating to true"));
    }

    #[test]
    fn test_no_library_queries() {
        let req = PlayerRequest::new("Spotify", "artists");
        assert!(SpotifyScripts.query(Query::Artists, &req).is_none());
    }

    #[test]
    fn test_play_playlist_passes_uri() {
        let req = PlayerRequest::new("Spotify", "playplaylist")
            .with_search("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M");
        let script = SpotifyScripts.play(PlaySelection::Playlist, &req).unwrap();
        assert_eq!(
            script.args,
            vec!["spotify:playlist:37i9dQZF1DXcBWIGoYBM5M", "playplaylist"]
        );
    }

    #[test]
    fn test_play_track_echoes_requested_command() {
        let req = PlayerRequest::new("Spotify", "playtrack")
            .with_search("spotify:track:4uLU6hMCjMI75M1A2tKUQC");
        let script = SpotifyScripts.play(PlaySelection::Track, &req).unwrap();
        assert_eq!(script.args[1], "playtrack");
        assert!(script.source.contains("return item 2 of argv"));
    }
}
