//! Logical sprite keys. These are stable lookup keys into the manifest.

pub const TAB_EYESHADOWS_ENABLE: &str = "Tabs/EyeShadowsEnable";
pub const TAB_EYESHADOWS_DISABLE: &str = "Tabs/EyeShadowsDisable";
pub const TAB_LIPSTICKS_ENABLE: &str = "Tabs/LipsticksEnable";
pub const TAB_LIPSTICKS_DISABLE: &str = "Tabs/LipsticksDisable";

/// Lips layer sprite for a lipstick color.
pub fn lip_key(color_index: u32) -> String {
    format!("Face/Lips/lip_{}", color_index)
}

/// Eyes layer sprite for an eyeshadow color.
pub fn eyes_key(color_index: u32) -> String {
    format!("Eyes/eyes_{}", color_index)
}

/// Loaded-brush indicator for an eyeshadow color.
pub fn brush_key(color_index: u32) -> String {
    format!("Brush/EyeShadowColor{}", color_index)
}
