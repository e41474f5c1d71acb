#![forbid(unsafe_code)]

/// Presentation capability flags parsed from the device descriptor at the
/// transport boundary. Absent fields on the wire are `false` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceDescriptor {
    pub aplt_supported: bool,
    pub apl_supported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCapability {
    NoVisual,
    LegacyText,
    FullGraphical,
}

impl DeviceCapability {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceCapability::NoVisual => "NO_VISUAL",
            DeviceCapability::LegacyText => "LEGACY_TEXT",
            DeviceCapability::FullGraphical => "FULL_GRAPHICAL",
        }
    }
}
