// Design Tokens
// Spacing and colour constants shared by both platform style sheets

/// Spacing in terminal cells
pub mod spacing {
    /// Rows occupied by the control (label sits on the middle row)
    pub const CONTROL_HEIGHT: u16 = 3;
    /// Columns taken by a separator line
    pub const SEPARATOR_WIDTH: u16 = 1;
}

/// Colours as 0xRRGGBB, converted with `hex_color`
pub mod colors {
    pub const TEXT: u32 = 0xFFFFFF;
    pub const TEXT_MUTED: u32 = 0x8E8E93;
    pub const SEPARATOR: u32 = 0x48484A;

    pub const IOS_SURFACE: u32 = 0x1C1C1E;
    pub const IOS_SURFACE_RAISED: u32 = 0x636366;
    /// Shading of the rounded ends of the row
    pub const IOS_SURFACE_EDGE: u32 = 0x2C2C2E;

    pub const ANDROID_SURFACE: u32 = 0x121212;
    pub const ANDROID_SURFACE_EDGE: u32 = 0x1F1B24;
    pub const ANDROID_ACCENT: u32 = 0x3700B3;
    pub const ANDROID_ACCENT_TEXT: u32 = 0xBB86FC;
}

/// Glyph for a separator line
pub const SEPARATOR_SYMBOL: &str = "│";
