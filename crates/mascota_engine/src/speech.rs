#![forbid(unsafe_code)]

// Known-public soundbank asset. The previous foley blink path returned 404.
pub const BLINK_SFX: &str =
    "soundbank://soundlibrary/ui/gameshow/amzn_ui_sfx_gameshow_tally_positive_01";

/// Interaction speech: a blink sound cue followed by the spoken message.
pub fn blink_ssml(message: &str) -> String {
    format!("<speak><audio src=\"{BLINK_SFX}\"/>{message}</speak>")
}

pub fn plain_ssml(message: &str) -> String {
    format!("<speak>{message}</speak>")
}
