#![forbid(unsafe_code)]

use mascota_contracts::device::{DeviceCapability, DeviceDescriptor};

/// Classify the device's display tier. The compact APL-T profile wins over
/// the rich APL flag when a device advertises both.
pub fn detect(descriptor: &DeviceDescriptor) -> DeviceCapability {
    if descriptor.aplt_supported {
        DeviceCapability::LegacyText
    } else if descriptor.apl_supported {
        DeviceCapability::FullGraphical
    } else {
        DeviceCapability::NoVisual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_descriptor_is_no_visual() {
        assert_eq!(detect(&DeviceDescriptor::default()), DeviceCapability::NoVisual);
    }

    #[test]
    fn aplt_only_is_legacy_text() {
        let descriptor = DeviceDescriptor {
            aplt_supported: true,
            apl_supported: false,
        };
        assert_eq!(detect(&descriptor), DeviceCapability::LegacyText);
    }

    #[test]
    fn apl_only_is_full_graphical() {
        let descriptor = DeviceDescriptor {
            aplt_supported: false,
            apl_supported: true,
        };
        assert_eq!(detect(&descriptor), DeviceCapability::FullGraphical);
    }

    #[test]
    fn compact_profile_wins_when_both_flags_set() {
        let descriptor = DeviceDescriptor {
            aplt_supported: true,
            apl_supported: true,
        };
        assert_eq!(detect(&descriptor), DeviceCapability::LegacyText);
    }
}
