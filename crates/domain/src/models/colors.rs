use serde::{Deserialize, Serialize};

/// `/v2/colors/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Dye id.
    pub id: u32,
    /// Dye name.
    pub name: String,
    /// Base RGB values.
    pub base_rgb: [u8; 3],
    /// Appearance on cloth.
    pub cloth: ColorMaterial,
    /// Appearance on leather.
    pub leather: ColorMaterial,
    /// Appearance on metal.
    pub metal: ColorMaterial,
    /// Unlocking item id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<u32>,
    /// Hue, material and rarity categories.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// How a dye renders on one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMaterial {
    /// Brightness shift.
    pub brightness: i32,
    /// Contrast multiplier.
    pub contrast: f32,
    /// Hue in degrees.
    pub hue: u32,
    /// Saturation multiplier.
    pub saturation: f32,
    /// Lightness multiplier.
    pub lightness: f32,
    /// Resulting RGB values.
    pub rgb: [u8; 3],
}
