#![forbid(unsafe_code)]

use serde_json::json;

use mascota_contracts::device::DeviceCapability;
use mascota_contracts::render::{
    DirectiveDocumentType, RenderDirective, MAX_GLYPH_CHARS, RENDER_TOKEN,
};

/// Build the render directive matching the detected capability, or `None`
/// for headless devices. The glyph source is clipped to the 4-character
/// display slot, never rejected.
pub fn select(capability: DeviceCapability, glyph_source: &str) -> Option<RenderDirective> {
    let document_type = match capability {
        DeviceCapability::NoVisual => return None,
        DeviceCapability::LegacyText => DirectiveDocumentType::AplText,
        DeviceCapability::FullGraphical => DirectiveDocumentType::Apl,
    };

    Some(RenderDirective {
        document_type,
        token: RENDER_TOKEN.to_string(),
        glyph: glyph_source.chars().take(MAX_GLYPH_CHARS).collect(),
    })
}

/// Expand a directive into the full document JSON sent to the device. The
/// layout is identical across tiers; only the document type tag differs.
pub fn directive_document(directive: &RenderDirective) -> serde_json::Value {
    json!({
        "type": directive.document_type.directive_type(),
        "token": directive.token,
        "document": {
            "type": directive.document_type.document_kind(),
            "version": directive.document_type.document_version(),
            "theme": "dark",
            "mainTemplate": {
                "parameters": ["payload"],
                "items": [
                    {
                        "type": "Text",
                        "text": directive.glyph,
                        "fontSize": "42dp",
                        "textAlign": "center",
                        "textAlignVertical": "center",
                        "width": "100vw",
                        "height": "100vh",
                    }
                ],
            },
        },
        "datasources": {},
    })
}
