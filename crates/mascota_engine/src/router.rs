#![forbid(unsafe_code)]

use mascota_contracts::session::PetSessionState;
use mascota_contracts::turn::{PetEvent, Reply, TurnKind};

use crate::capability::detect;
use crate::i18n::{text, MessageKey};
use crate::render::select;
use crate::speech::{blink_ssml, plain_ssml};
use crate::state::{advance, RawSessionState};

pub const APOLOGY: &str = "Sorry, I couldn't process that request.";

pub type Predicate = fn(&PetEvent) -> bool;
pub type Action = fn(&PetEvent, Option<&RawSessionState>) -> TurnOutcome;

/// What one dispatched turn produced. `new_state` is `Some` only for the
/// actions that touch session state; the adapter hands it back to the
/// session store unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: Reply,
    pub new_state: Option<PetSessionState>,
}

pub struct HandlerRegistration {
    pub predicate: Predicate,
    pub action: Action,
}

/// Ordered first-match-wins registry. Assembled once, immutable afterward.
pub struct DispatchRegistry {
    entries: Vec<HandlerRegistration>,
}

impl DispatchRegistry {
    /// The standard skill wiring. The always-true catch-all is last, so
    /// every event resolves to exactly one action.
    pub fn standard() -> Self {
        Self::from_entries(vec![
            HandlerRegistration {
                predicate: is_launch,
                action: handle_launch,
            },
            HandlerRegistration {
                predicate: is_pet_intent,
                action: handle_pet,
            },
            HandlerRegistration {
                predicate: is_help_intent,
                action: handle_help,
            },
            HandlerRegistration {
                predicate: is_cancel_or_stop_intent,
                action: handle_cancel_or_stop,
            },
            HandlerRegistration {
                predicate: is_fallback_intent,
                action: handle_fallback,
            },
            HandlerRegistration {
                predicate: is_session_ended,
                action: handle_session_ended,
            },
            HandlerRegistration {
                predicate: always,
                action: handle_unhandled,
            },
        ])
    }

    pub fn from_entries(entries: Vec<HandlerRegistration>) -> Self {
        Self { entries }
    }

    /// Evaluate predicates in registration order and run the first match.
    /// Total as long as a catch-all is registered last; a registry without
    /// one still resolves to the unhandled action rather than failing.
    pub fn dispatch(&self, event: &PetEvent, raw_state: Option<&RawSessionState>) -> TurnOutcome {
        for entry in &self.entries {
            if (entry.predicate)(event) {
                return (entry.action)(event, raw_state);
            }
        }
        handle_unhandled(event, raw_state)
    }
}

pub fn is_launch(event: &PetEvent) -> bool {
    matches!(event.kind, TurnKind::Launch)
}

pub fn is_pet_intent(event: &PetEvent) -> bool {
    event.intent_name() == Some("PetIntent")
}

pub fn is_help_intent(event: &PetEvent) -> bool {
    event.intent_name() == Some("AMAZON.HelpIntent")
}

pub fn is_cancel_or_stop_intent(event: &PetEvent) -> bool {
    matches!(
        event.intent_name(),
        Some("AMAZON.CancelIntent") | Some("AMAZON.StopIntent")
    )
}

pub fn is_fallback_intent(event: &PetEvent) -> bool {
    event.intent_name() == Some("AMAZON.FallbackIntent")
}

pub fn is_session_ended(event: &PetEvent) -> bool {
    matches!(event.kind, TurnKind::SessionEnded)
}

pub fn always(_event: &PetEvent) -> bool {
    true
}

fn handle_launch(event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    let state = PetSessionState::default();
    let reply = Reply {
        speech: Some(plain_ssml(text(&event.locale, MessageKey::Launch))),
        reprompt: None,
        directive: select(detect(&event.device), state.frame()),
        end_session: false,
    };
    TurnOutcome {
        reply,
        new_state: Some(state),
    }
}

fn handle_pet(event: &PetEvent, raw_state: Option<&RawSessionState>) -> TurnOutcome {
    let (state, frame) = advance(raw_state);
    let reply = Reply {
        speech: Some(blink_ssml(text(&event.locale, MessageKey::Pet))),
        reprompt: None,
        directive: select(detect(&event.device), frame),
        end_session: false,
    };
    TurnOutcome {
        reply,
        new_state: Some(state),
    }
}

fn handle_help(event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    let help = text(&event.locale, MessageKey::Help);
    TurnOutcome {
        reply: Reply {
            speech: Some(plain_ssml(help)),
            reprompt: Some(plain_ssml(help)),
            directive: None,
            end_session: false,
        },
        new_state: None,
    }
}

fn handle_cancel_or_stop(event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    TurnOutcome {
        reply: Reply {
            speech: Some(plain_ssml(text(&event.locale, MessageKey::Goodbye))),
            reprompt: None,
            directive: None,
            end_session: true,
        },
        new_state: None,
    }
}

fn handle_fallback(event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    TurnOutcome {
        reply: Reply {
            speech: Some(plain_ssml(text(&event.locale, MessageKey::Fallback))),
            reprompt: Some(plain_ssml(text(&event.locale, MessageKey::FallbackReprompt))),
            directive: None,
            end_session: false,
        },
        new_state: None,
    }
}

fn handle_session_ended(_event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    // Cannot speak into an already-closing session.
    TurnOutcome {
        reply: Reply {
            speech: None,
            reprompt: None,
            directive: None,
            end_session: true,
        },
        new_state: None,
    }
}

fn handle_unhandled(_event: &PetEvent, _raw_state: Option<&RawSessionState>) -> TurnOutcome {
    TurnOutcome {
        reply: Reply {
            speech: Some(plain_ssml(APOLOGY)),
            reprompt: None,
            directive: None,
            end_session: true,
        },
        new_state: None,
    }
}
