use super::common::{with_list_handlers, AutomationScript};
use crate::player::request::PlayerRequest;
use crate::player::traits::{PlayerScripts, PlaySelection, Query, Source, Transport};

const APP: &str = "Music";

/// Playlist the bridge (re)creates to play a whole album.
pub const SCRATCH_PLAYLIST: &str = "nowplaying-bridge";

const ARTISTS: &str = r#"
on run argv
    set needle to item 1 of argv
    tell application "Music"
        if needle is "" then
            set found to artist of every track of library playlist 1
        else
            set found to artist of every track of library playlist 1 whose artist contains needle
        end if
    end tell
    return my joinQuoted(found, true)
end run
"#;

const ALBUMS: &str = r#"
on run argv
    set artistName to item 1 of argv
    tell application "Music"
        set found to album of every track of library playlist 1 whose artist is artistName
    end tell
    return my joinQuoted(found, true)
end run
"#;

const ALBUM_TRACKS: &str = r#"
on run argv
    set albumName to item 1 of argv
    set artistName to item 2 of argv
    tell application "Music"
        if artistName is "" then
            set found to name of every track of library playlist 1 whose album is albumName
        else
            set found to name of every track of library playlist 1 whose album is albumName and artist is artistName
        end if
    end tell
    return my joinQuoted(found, false)
end run
"#;

const PLAYLISTS: &str = r#"
on run argv
    tell application "Music"
        set found to name of every user playlist
    end tell
    return my joinQuoted(found, true)
end run
"#;

const PLAYLIST_TRACKS: &str = r#"
on run argv
    set playlistName to item 1 of argv
    tell application "Music"
        set found to name of every track of user playlist playlistName
    end tell
    return my joinQuoted(found, false)
end run
"#;

const TRACKS: &str = r#"
on run argv
    set needle to item 1 of argv
    tell application "Music"
        if needle is "" then
            set found to name of every track of library playlist 1
        else
            set found to name of every track of library playlist 1 whose name contains needle
        end if
    end tell
    return my joinQuoted(found, false)
end run
"#;

const GENRES: &str = r#"
on run argv
    tell application "Music"
        set found to genre of every track of library playlist 1
    end tell
    return my joinQuoted(found, true)
end run
"#;

const GENRE_ARTISTS: &str = r#"
on run argv
    set genreName to item 1 of argv
    tell application "Music"
        set found to artist of every track of library playlist 1 whose genre is genreName
    end tell
    return my joinQuoted(found, true)
end run
"#;

const PLAY_TRACK: &str = r#"
on run argv
    set trackName to item 1 of argv
    set albumName to item 2 of argv
    set artistName to item 3 of argv
    tell application "Music"
        set candidates to every track of library playlist 1 whose name is trackName
        repeat with t in candidates
            if (albumName is "" or album of t is albumName) and (artistName is "" or artist of t is artistName) then
                play t
                return "playtrack"
            end if
        end repeat
    end tell
    error "no matching track" number 1
end run
"#;

const PLAY_ALBUM: &str = r#"
on run argv
    set albumName to item 1 of argv
    set artistName to item 2 of argv
    set scratchName to item 3 of argv
    tell application "Music"
        if artistName is "" then
            set albumTracks to every track of library playlist 1 whose album is albumName
        else
            set albumTracks to every track of library playlist 1 whose album is albumName and artist is artistName
        end if
        if albumTracks is {} then error "no matching album" number 1
        if exists user playlist scratchName then delete user playlist scratchName
        set scratch to make new user playlist with properties {name:scratchName}
        repeat with t in albumTracks
            duplicate t to scratch
        end repeat
        set shuffle enabled to false
        play scratch
    end tell
    return "playalbum"
end run
"#;

const PLAY_PLAYLIST: &str = r#"
on run argv
    set playlistName to item 1 of argv
    tell application "Music"
        play user playlist playlistName
    end tell
    return "playplaylist"
end run
"#;

const PROBE: &str = r#"
tell application "Music"
    if player state is stopped then return "stopped"
    return (artist of current track) & " - " & (name of current track)
end tell
"#;

/// Script table for the local library app.
pub struct MusicScripts;

impl PlayerScripts for MusicScripts {
    fn source(&self) -> Source {
        Source::Library
    }

    fn transport(&self, action: Transport) -> AutomationScript {
        let statement = match action {
            Transport::Previous => "previous track",
            Transport::Next => "next track",
            Transport::Stop => "pause",
            Transport::Play => "play",
            Transport::PlayPause => "playpause",
            Transport::Shuffle => "set shuffle enabled to true",
            Transport::NoShuffle => "set shuffle enabled to false",
            Transport::Repeat => "set song repeat to all",
            Transport::NoRepeat => "set song repeat to off",
        };
        AutomationScript::tell(APP, statement)
    }

    fn query(&self, query: Query, request: &PlayerRequest) -> Option<AutomationScript> {
        let script = match query {
            Query::Artists => {
                AutomationScript::new(with_list_handlers(ARTISTS)).arg(&request.search)
            }
            Query::Albums => {
                AutomationScript::new(with_list_handlers(ALBUMS)).arg(&request.search)
            }
            Query::AlbumTracks => AutomationScript::new(with_list_handlers(ALBUM_TRACKS))
                .arg(&request.search)
                .arg(&request.detail),
            Query::Playlists => AutomationScript::new(with_list_handlers(PLAYLISTS)),
            Query::PlaylistTracks => {
                AutomationScript::new(with_list_handlers(PLAYLIST_TRACKS)).arg(&request.search)
            }
            Query::Tracks => {
                AutomationScript::new(with_list_handlers(TRACKS)).arg(&request.search)
            }
            Query::Genres => AutomationScript::new(with_list_handlers(GENRES)),
            Query::GenreArtists => {
                AutomationScript::new(with_list_handlers(GENRE_ARTISTS)).arg(&request.search)
            }
        };
        Some(script)
    }

    fn play(&self, selection: PlaySelection, request: &PlayerRequest) -> Option<AutomationScript> {
        let script = match selection {
            PlaySelection::Track => AutomationScript::new(PLAY_TRACK)
                .arg(&request.search)
                .arg(&request.detail)
                .arg(&request.detail2),
            PlaySelection::Album => AutomationScript::new(PLAY_ALBUM)
                .arg(&request.search)
                .arg(&request.detail)
                .arg(SCRATCH_PLAYLIST),
            PlaySelection::Playlist => AutomationScript::new(PLAY_PLAYLIST).arg(&request.search),
        };
        Some(script)
    }

    fn probe(&self) -> AutomationScript {
        AutomationScript::new(PROBE)
    }
}
