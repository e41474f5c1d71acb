#![forbid(unsafe_code)]

use crate::{ContractViolation, Validate};

/// Stable token so a client replaces the prior visual instead of stacking.
pub const RENDER_TOKEN: &str = "clockPetEyes";

pub const MAX_GLYPH_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveDocumentType {
    AplText,
    Apl,
}

impl DirectiveDocumentType {
    pub fn directive_type(self) -> &'static str {
        match self {
            DirectiveDocumentType::AplText => "Alexa.Presentation.APLT.RenderDocument",
            DirectiveDocumentType::Apl => "Alexa.Presentation.APL.RenderDocument",
        }
    }

    pub fn document_kind(self) -> &'static str {
        match self {
            DirectiveDocumentType::AplText => "APLT",
            DirectiveDocumentType::Apl => "APL",
        }
    }

    pub fn document_version(self) -> &'static str {
        match self {
            DirectiveDocumentType::AplText => "1",
            DirectiveDocumentType::Apl => "1.8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDirective {
    pub document_type: DirectiveDocumentType,
    pub token: String,
    pub glyph: String,
}

impl Validate for RenderDirective {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.token != RENDER_TOKEN {
            return Err(ContractViolation::InvalidValue {
                field: "render_directive.token",
                reason: "must equal RENDER_TOKEN",
            });
        }
        let glyph_chars = self.glyph.chars().count();
        if glyph_chars == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "render_directive.glyph",
                reason: "must not be empty",
            });
        }
        if glyph_chars > MAX_GLYPH_CHARS {
            return Err(ContractViolation::InvalidValue {
                field: "render_directive.glyph",
                reason: "must be <= MAX_GLYPH_CHARS",
            });
        }
        Ok(())
    }
}
