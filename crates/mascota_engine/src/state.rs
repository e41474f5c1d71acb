#![forbid(unsafe_code)]

use mascota_contracts::session::{Mood, PetSessionState, EYE_FRAMES};

/// Wire-shaped session attributes as the session store hands them back.
/// Fields stay untyped JSON values so a corrupt store entry deserializes
/// instead of failing the whole turn; `normalize` repairs them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawSessionState {
    #[serde(rename = "eyeIndex", default)]
    pub eye_index: Option<serde_json::Value>,
    #[serde(default)]
    pub mood: Option<serde_json::Value>,
}

/// Total repair of possibly-invalid session attributes. Each field resets
/// to its default independently; never fails.
pub fn normalize(raw: Option<&RawSessionState>) -> PetSessionState {
    let mut state = PetSessionState::default();
    let Some(raw) = raw else {
        return state;
    };

    if let Some(idx) = raw.eye_index.as_ref().and_then(|v| v.as_i64()) {
        if (0..EYE_FRAMES.len() as i64).contains(&idx) {
            state.eye_index = idx as u8;
        }
    }
    if let Some(mood) = raw
        .mood
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(Mood::parse)
    {
        state.mood = mood;
    }

    state
}

/// Advance the eye animation by one step, wrapping over the frame cycle.
/// Normalizes first, so this is safe to call with corrupt state.
pub fn advance(raw: Option<&RawSessionState>) -> (PetSessionState, &'static str) {
    let state = normalize(raw);
    let eye_index = (state.eye_index + 1) % EYE_FRAMES.len() as u8;
    let next = PetSessionState {
        eye_index,
        mood: state.mood,
    };
    (next, EYE_FRAMES[eye_index as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(eye_index: serde_json::Value, mood: serde_json::Value) -> RawSessionState {
        RawSessionState {
            eye_index: Some(eye_index),
            mood: Some(mood),
        }
    }

    #[test]
    fn normalize_absent_state_yields_defaults() {
        let state = normalize(None);
        assert_eq!(state.eye_index, 0);
        assert_eq!(state.mood, Mood::Awake);
    }

    #[test]
    fn normalize_resets_invalid_fields_independently() {
        let state = normalize(Some(&raw(json!("x"), json!("unknown"))));
        assert_eq!(state, PetSessionState::default());

        let state = normalize(Some(&raw(json!(2), json!("unknown"))));
        assert_eq!(state.eye_index, 2);
        assert_eq!(state.mood, Mood::Awake);
    }

    #[test]
    fn normalize_resets_out_of_range_index() {
        let state = normalize(Some(&raw(json!(-1), json!("awake"))));
        assert_eq!(state.eye_index, 0);

        let state = normalize(Some(&raw(json!(EYE_FRAMES.len()), json!("awake"))));
        assert_eq!(state.eye_index, 0);
    }

    #[test]
    fn normalize_passes_valid_state_through() {
        let state = normalize(Some(&raw(json!(3), json!("awake"))));
        assert_eq!(state.eye_index, 3);
        assert_eq!(state.mood, Mood::Awake);
    }

    #[test]
    fn normalized_state_always_satisfies_the_contract() {
        use mascota_contracts::Validate;
        for eye_index in [json!(-7), json!(0), json!(3), json!(99), json!(true)] {
            let state = normalize(Some(&raw(eye_index, json!(42))));
            assert!(state.validate().is_ok());
        }
    }

    #[test]
    fn advance_steps_one_frame_forward() {
        let (state, frame) = advance(Some(&raw(json!(0), json!("awake"))));
        assert_eq!(state.eye_index, 1);
        assert_eq!(frame, EYE_FRAMES[1]);
    }

    #[test]
    fn advance_wraps_at_last_frame() {
        let (state, frame) = advance(Some(&raw(json!(3), json!("awake"))));
        assert_eq!(state.eye_index, 0);
        assert_eq!(frame, EYE_FRAMES[0]);
    }

    #[test]
    fn advance_returns_to_start_after_full_cycle() {
        let mut raw_state = RawSessionState::default();
        for _ in 0..EYE_FRAMES.len() {
            let (state, _) = advance(Some(&raw_state));
            raw_state = RawSessionState {
                eye_index: Some(json!(state.eye_index)),
                mood: Some(json!(state.mood.as_str())),
            };
        }
        assert_eq!(normalize(Some(&raw_state)), normalize(None));
    }
}
