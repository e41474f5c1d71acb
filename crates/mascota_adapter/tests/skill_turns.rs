#![forbid(unsafe_code)]

use mascota_adapter::{SkillRuntime, SkillTurnRequest};
use serde_json::json;

fn request_from(value: serde_json::Value) -> SkillTurnRequest {
    serde_json::from_value(value).expect("turn request should deserialize")
}

#[test]
fn launch_turn_resets_attributes_and_renders_for_an_aplt_device() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({
        "request_type": "LaunchRequest",
        "locale": "en-US",
        "session_attributes": { "eyeIndex": 2, "mood": "awake" },
        "supported_interfaces": ["Alexa.Presentation.APLT"],
    }));

    let response = runtime.run_turn(&request);

    assert_eq!(response.speech.as_deref(), Some("<speak>mrrr</speak>"));
    assert_eq!(
        response.session_attributes,
        Some(json!({ "eyeIndex": 0, "mood": "awake" }))
    );
    assert!(!response.end_session);

    let directive = response.directive.expect("aplt device should get a directive");
    assert_eq!(directive["type"], "Alexa.Presentation.APLT.RenderDocument");
    assert_eq!(directive["token"], "clockPetEyes");
    assert_eq!(
        directive["document"]["mainTemplate"]["items"][0]["text"],
        "o_o"
    );
}

#[test]
fn pet_turn_advances_attributes_and_keeps_the_session_open() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({
        "request_type": "IntentRequest",
        "intent_name": "PetIntent",
        "locale": "es-ES",
        "session_attributes": { "eyeIndex": 0, "mood": "awake" },
        "supported_interfaces": ["Alexa.Presentation.APL"],
    }));

    let response = runtime.run_turn(&request);

    let speech = response.speech.expect("pet turn should speak");
    assert!(speech.contains("buen mascota"));
    assert!(speech.contains("<audio src=\"soundbank://"));
    assert_eq!(
        response.session_attributes,
        Some(json!({ "eyeIndex": 1, "mood": "awake" }))
    );
    assert!(!response.end_session);

    let directive = response.directive.expect("apl device should get a directive");
    assert_eq!(directive["type"], "Alexa.Presentation.APL.RenderDocument");
    assert_eq!(
        directive["document"]["mainTemplate"]["items"][0]["text"],
        "-_-"
    );
}

#[test]
fn corrupt_session_attributes_are_repaired_not_rejected() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({
        "request_type": "IntentRequest",
        "intent_name": "PetIntent",
        "session_attributes": { "eyeIndex": "x", "mood": "unknown", "stray": true },
    }));

    let response = runtime.run_turn(&request);
    assert_eq!(
        response.session_attributes,
        Some(json!({ "eyeIndex": 1, "mood": "awake" }))
    );
    // Headless request: no directive either way.
    assert_eq!(response.directive, None);
}

#[test]
fn headless_pet_turn_speaks_without_a_directive() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({
        "request_type": "IntentRequest",
        "intent_name": "PetIntent",
        "locale": "en-US",
    }));

    let response = runtime.run_turn(&request);
    assert!(response.speech.is_some());
    assert_eq!(response.directive, None);
}

#[test]
fn session_ended_turn_is_silent() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({ "request_type": "SessionEndedRequest" }));

    let response = runtime.run_turn(&request);
    assert_eq!(response.speech, None);
    assert_eq!(response.directive, None);
    assert_eq!(response.session_attributes, None);
    assert!(response.end_session);
}

#[test]
fn unknown_request_types_fall_through_to_the_apology() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({ "request_type": "Bogus.Request" }));

    let response = runtime.run_turn(&request);
    assert_eq!(
        response.speech.as_deref(),
        Some("<speak>Sorry, I couldn't process that request.</speak>")
    );
    assert!(response.end_session);
}

#[test]
fn a_device_advertising_both_profiles_gets_the_compact_document() {
    let runtime = SkillRuntime::new();
    let request = request_from(json!({
        "request_type": "LaunchRequest",
        "supported_interfaces": ["Alexa.Presentation.APL", "Alexa.Presentation.APLT"],
    }));

    let response = runtime.run_turn(&request);
    let directive = response.directive.expect("visual device should get a directive");
    assert_eq!(directive["type"], "Alexa.Presentation.APLT.RenderDocument");
    assert_eq!(directive["document"]["type"], "APLT");
}
