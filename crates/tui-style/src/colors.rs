//! Color values and the hue palette used by the registry tables.

use ratatui::style::Color as RatatuiColor;

/// Named hues of the catalog palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

/// Lightness step within a hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    /// Tinted background (50)
    Wash,
    /// Soft border (200)
    Soft,
    /// Mid tone (400)
    Light,
    /// Base accent (500)
    Base,
    /// Solid fill (600)
    Solid,
    /// Hover/pressed fill (700)
    Strong,
    /// Text on a wash (800)
    Deep,
    /// Near black (900)
    Ink,
}

impl Hue {
    /// Resolve a shade of this hue to a terminal color.
    pub fn shade(self, shade: Shade) -> RatatuiColor {
        let [w, s, l, b, so, st, d, i] = self.ramp();
        let (r, g, bl) = match shade {
            Shade::Wash => w,
            Shade::Soft => s,
            Shade::Light => l,
            Shade::Base => b,
            Shade::Solid => so,
            Shade::Strong => st,
            Shade::Deep => d,
            Shade::Ink => i,
        };
        RatatuiColor::Rgb(r, g, bl)
    }

    fn ramp(self) -> [(u8, u8, u8); 8] {
        match self {
            Self::Slate => [(248, 250, 252), (226, 232, 240), (148, 163, 184), (100, 116, 139), (71, 85, 105), (51, 65, 85), (30, 41, 59), (15, 23, 42)],
            Self::Gray => [(249, 250, 251), (229, 231, 235), (156, 163, 175), (107, 114, 128), (75, 85, 99), (55, 65, 81), (31, 41, 55), (17, 24, 39)],
            Self::Zinc => [(250, 250, 250), (228, 228, 231), (161, 161, 170), (113, 113, 122), (82, 82, 91), (63, 63, 70), (39, 39, 42), (24, 24, 27)],
            Self::Neutral => [(250, 250, 250), (229, 229, 229), (163, 163, 163), (115, 115, 115), (82, 82, 82), (64, 64, 64), (38, 38, 38), (23, 23, 23)],
            Self::Stone => [(250, 250, 249), (231, 229, 228), (168, 162, 158), (120, 113, 108), (87, 83, 78), (68, 64, 60), (41, 37, 36), (28, 25, 23)],
            Self::Red => [(254, 242, 242), (254, 202, 202), (248, 113, 113), (239, 68, 68), (220, 38, 38), (185, 28, 28), (153, 27, 27), (127, 29, 29)],
            Self::Orange => [(255, 247, 237), (254, 215, 170), (251, 146, 60), (249, 115, 22), (234, 88, 12), (194, 65, 12), (154, 52, 18), (124, 45, 18)],
            Self::Amber => [(255, 251, 235), (253, 230, 138), (251, 191, 36), (245, 158, 11), (217, 119, 6), (180, 83, 9), (146, 64, 14), (120, 53, 15)],
            Self::Yellow => [(254, 252, 232), (254, 240, 138), (250, 204, 21), (234, 179, 8), (202, 138, 4), (161, 98, 7), (133, 77, 14), (113, 63, 18)],
            Self::Lime => [(247, 254, 231), (217, 249, 157), (163, 230, 53), (132, 204, 22), (101, 163, 13), (77, 124, 15), (63, 98, 18), (54, 83, 20)],
            Self::Green => [(240, 253, 244), (187, 247, 208), (74, 222, 128), (34, 197, 94), (22, 163, 74), (21, 128, 61), (22, 101, 52), (20, 83, 45)],
            Self::Emerald => [(236, 253, 245), (167, 243, 208), (52, 211, 153), (16, 185, 129), (5, 150, 105), (4, 120, 87), (6, 95, 70), (6, 78, 59)],
            Self::Teal => [(240, 253, 250), (153, 246, 228), (45, 212, 191), (20, 184, 166), (13, 148, 136), (15, 118, 110), (17, 94, 89), (19, 78, 74)],
            Self::Cyan => [(236, 254, 255), (165, 243, 252), (34, 211, 238), (6, 182, 212), (8, 145, 178), (14, 116, 144), (21, 94, 117), (22, 78, 99)],
            Self::Sky => [(240, 249, 255), (186, 230, 253), (56, 189, 248), (14, 165, 233), (2, 132, 199), (3, 105, 161), (7, 89, 133), (12, 74, 110)],
            Self::Blue => [(239, 246, 255), (191, 219, 254), (96, 165, 250), (59, 130, 246), (37, 99, 235), (29, 78, 216), (30, 64, 175), (30, 58, 138)],
            Self::Indigo => [(238, 242, 255), (199, 210, 254), (129, 140, 248), (99, 102, 241), (79, 70, 229), (67, 56, 202), (55, 48, 163), (49, 46, 129)],
            Self::Violet => [(245, 243, 255), (221, 214, 254), (167, 139, 250), (139, 92, 246), (124, 58, 237), (109, 40, 217), (91, 33, 182), (76, 29, 149)],
            Self::Purple => [(250, 245, 255), (233, 213, 255), (192, 132, 252), (168, 85, 247), (147, 51, 234), (126, 34, 206), (107, 33, 168), (88, 28, 135)],
            Self::Fuchsia => [(253, 244, 255), (245, 208, 254), (232, 121, 249), (217, 70, 239), (192, 38, 211), (162, 28, 175), (134, 25, 143), (112, 26, 117)],
            Self::Pink => [(253, 242, 248), (251, 207, 232), (244, 114, 182), (236, 72, 153), (219, 39, 119), (190, 24, 93), (157, 23, 77), (131, 24, 67)],
            Self::Rose => [(255, 241, 242), (254, 205, 211), (251, 113, 133), (244, 63, 94), (225, 29, 72), (190, 18, 60), (159, 18, 57), (136, 19, 55)],
        }
    }
}

/// Pure white.
pub const WHITE: RatatuiColor = RatatuiColor::Rgb(255, 255, 255);

/// Pure black.
pub const BLACK: RatatuiColor = RatatuiColor::Rgb(0, 0, 0);

/// Near-black surface used by dark containers.
pub const CHARCOAL: RatatuiColor = RatatuiColor::Rgb(24, 24, 24);
