#![forbid(unsafe_code)]

use crate::{ContractViolation, Validate};

pub const EYE_FRAMES: [&str; 4] = ["o_o", "-_-", "^_^", "O_O"];
pub const DEFAULT_EYE_INDEX: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awake,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Awake => "awake",
        }
    }

    pub fn parse(v: &str) -> Option<Mood> {
        match v {
            "awake" => Some(Mood::Awake),
            _ => None,
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Awake
    }
}

/// The only persisted entity, scoped to one conversational session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetSessionState {
    pub eye_index: u8,
    pub mood: Mood,
}

impl PetSessionState {
    pub fn frame(&self) -> &'static str {
        EYE_FRAMES[self.eye_index as usize % EYE_FRAMES.len()]
    }
}

impl Default for PetSessionState {
    fn default() -> Self {
        Self {
            eye_index: DEFAULT_EYE_INDEX,
            mood: Mood::Awake,
        }
    }
}

impl Validate for PetSessionState {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.eye_index as usize >= EYE_FRAMES.len() {
            return Err(ContractViolation::InvalidValue {
                field: "pet_session_state.eye_index",
                reason: "must be < EYE_FRAMES.len()",
            });
        }
        Ok(())
    }
}
