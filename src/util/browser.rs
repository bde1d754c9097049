//! Browser-only conveniences: speech synthesis, sound cues, and confirmation
//! prompts.
//!
//! TRADE-OFFS
//! ==========
//! All are best-effort. Without a browser they no-op (`confirm` answers
//! "no" so destructive actions never run unattended).

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// BCP 47 tag for the voice used to pronounce vocabulary.
pub const SPEECH_LANG: &str = "ja-JP";

/// Speak `text` with the browser's Japanese voice.
pub fn speak(text: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            log::warn!("speech synthesis unavailable");
            return;
        };
        match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(SPEECH_LANG);
                synth.speak(&utterance);
            }
            Err(_) => log::warn!("failed to create speech utterance"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}

/// Short sound effects served with the app's static assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Correct,
    LessonComplete,
}

impl Cue {
    #[must_use]
    pub fn src(self) -> &'static str {
        match self {
            Self::Correct => "/audio/correct-sound-effect.mp3",
            Self::LessonComplete => "/audio/lesson-complete-sound-effect.mp3",
        }
    }
}

/// Play `cue` without waiting for it to finish.
pub fn play(cue: Cue) {
    #[cfg(feature = "csr")]
    {
        // Autoplay policies may reject the promise; the cue is simply skipped.
        match web_sys::HtmlAudioElement::new_with_src(cue.src()) {
            Ok(audio) => {
                if audio.play().is_err() {
                    log::warn!("could not play {}", cue.src());
                }
            }
            Err(_) => log::warn!("audio element unavailable for {}", cue.src()),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cue;
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
