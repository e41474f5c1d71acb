#![forbid(unsafe_code)]

use crate::device::DeviceDescriptor;
use crate::render::RenderDirective;

/// Locale tag as supplied by the transport, e.g. "es-ES". Absent or empty
/// tags are valid and resolve to the default language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn language_code(&self) -> String {
        self.0
            .split('-')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnKind {
    Launch,
    Intent { name: String },
    SessionEnded,
    Other { request_type: String },
}

/// One inbound conversational turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetEvent {
    pub kind: TurnKind,
    pub locale: LocaleTag,
    pub device: DeviceDescriptor,
}

impl PetEvent {
    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            TurnKind::Intent { name } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Immutable reply record assembled by each handler action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub directive: Option<RenderDirective>,
    pub end_session: bool,
}
