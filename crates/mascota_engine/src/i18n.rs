#![forbid(unsafe_code)]

use mascota_contracts::turn::LocaleTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Launch,
    Help,
    Fallback,
    FallbackReprompt,
    Pet,
    Goodbye,
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Launch => "mrrr",
        MessageKey::Help => "Say wake up, mascota.",
        MessageKey::Fallback => "I only understand wake up, mascota right now.",
        MessageKey::FallbackReprompt => "Say wake up, mascota.",
        MessageKey::Pet => "good pet",
        MessageKey::Goodbye => "Goodbye.",
    }
}

fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Launch => "mrrr",
        MessageKey::Help => "Di coge, mascota.",
        MessageKey::Fallback => "Por ahora solo entiendo coge, mascota.",
        MessageKey::FallbackReprompt => "Di coge, mascota.",
        MessageKey::Pet => "buen mascota",
        MessageKey::Goodbye => "Adiós.",
    }
}

/// Total lookup. Unknown languages fall back to English; the per-key match
/// is exhaustive, so there is no missing-key case to fall back from.
pub fn text(locale: &LocaleTag, key: MessageKey) -> &'static str {
    match locale.language_code().as_str() {
        "es" => spanish(key),
        _ => english(key),
    }
}
