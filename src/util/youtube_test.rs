use super::*;

#[test]
fn video_id_from_watch_link() {
    assert_eq!(video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
    assert_eq!(video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"), Some("dQw4w9WgXcQ"));
}

#[test]
fn video_id_from_short_link() {
    assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"), Some("dQw4w9WgXcQ"));
}

#[test]
fn video_id_missing() {
    assert_eq!(video_id("https://vimeo.com/12345"), None);
    assert_eq!(video_id("https://www.youtube.com/watch?v="), None);
}

#[test]
fn embed_and_thumbnail_urls() {
    let link = "https://www.youtube.com/watch?v=abc123";
    assert_eq!(embed_url(link).as_deref(), Some("https://www.youtube.com/embed/abc123?rel=0"));
    assert_eq!(thumbnail_url(link).as_deref(), Some("https://img.youtube.com/vi/abc123/mqdefault.jpg"));
    assert_eq!(embed_url("not a video"), None);
}
