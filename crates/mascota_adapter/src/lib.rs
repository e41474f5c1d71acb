#![forbid(unsafe_code)]

use serde_json::json;

use mascota_contracts::device::DeviceDescriptor;
use mascota_contracts::session::PetSessionState;
use mascota_contracts::turn::{LocaleTag, PetEvent, TurnKind};
use mascota_engine::render;
use mascota_engine::router::DispatchRegistry;
use mascota_engine::state::RawSessionState;

pub const APLT_INTERFACE: &str = "Alexa.Presentation.APLT";
pub const APL_INTERFACE: &str = "Alexa.Presentation.APL";

/// One inbound turn as the transport delivers it. Everything past the
/// request type is optional; missing fields default rather than reject.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SkillTurnRequest {
    pub request_type: String,
    #[serde(default)]
    pub intent_name: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub session_attributes: Option<RawSessionState>,
    #[serde(default)]
    pub supported_interfaces: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SkillTurnResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub directive: Option<serde_json::Value>,
    pub session_attributes: Option<serde_json::Value>,
    pub end_session: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdapterHealthResponse {
    pub status: String,
}

pub fn parse_device_descriptor(interfaces: &[String]) -> DeviceDescriptor {
    DeviceDescriptor {
        aplt_supported: interfaces.iter().any(|i| i == APLT_INTERFACE),
        apl_supported: interfaces.iter().any(|i| i == APL_INTERFACE),
    }
}

pub fn parse_event(request: &SkillTurnRequest) -> PetEvent {
    let kind = match request.request_type.as_str() {
        "LaunchRequest" => TurnKind::Launch,
        "IntentRequest" => TurnKind::Intent {
            name: request.intent_name.clone().unwrap_or_default(),
        },
        "SessionEndedRequest" => TurnKind::SessionEnded,
        other => TurnKind::Other {
            request_type: other.to_string(),
        },
    };

    PetEvent {
        kind,
        locale: LocaleTag::new(request.locale.clone().unwrap_or_default()),
        device: parse_device_descriptor(&request.supported_interfaces),
    }
}

fn session_attributes_value(state: &PetSessionState) -> serde_json::Value {
    json!({
        "eyeIndex": state.eye_index,
        "mood": state.mood,
    })
}

/// Runs one dispatch turn per request. Session persistence stays external:
/// new attributes are echoed back for the host session store.
pub struct SkillRuntime {
    registry: DispatchRegistry,
}

impl SkillRuntime {
    pub fn new() -> Self {
        Self {
            registry: DispatchRegistry::standard(),
        }
    }

    pub fn run_turn(&self, request: &SkillTurnRequest) -> SkillTurnResponse {
        let event = parse_event(request);
        let outcome = self
            .registry
            .dispatch(&event, request.session_attributes.as_ref());

        SkillTurnResponse {
            speech: outcome.reply.speech,
            reprompt: outcome.reply.reprompt,
            directive: outcome
                .reply
                .directive
                .as_ref()
                .map(render::directive_document),
            session_attributes: outcome
                .new_state
                .as_ref()
                .map(session_attributes_value),
            end_session: outcome.reply.end_session,
        }
    }
}

impl Default for SkillRuntime {
    fn default() -> Self {
        Self::new()
    }
}
