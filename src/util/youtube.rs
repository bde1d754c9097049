//! YouTube link helpers for the tutorials view.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

/// Extract the video id from a watch link (`...watch?v=<id>&...`) or a
/// `youtu.be/<id>` short link.
#[must_use]
pub fn video_id(url: &str) -> Option<&str> {
    let tail = match url.split_once("v=") {
        Some((_, tail)) => tail,
        None => url.split_once("youtu.be/")?.1,
    };
    let id = tail.split(['&', '?', '#']).next().unwrap_or_default();
    (!id.is_empty()).then_some(id)
}

/// Player URL for an embedded iframe.
#[must_use]
pub fn embed_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("https://www.youtube.com/embed/{id}?rel=0"))
}

#[must_use]
pub fn thumbnail_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"))
}
