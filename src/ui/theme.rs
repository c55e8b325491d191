use crate::catalog::{Priority, Status};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors (badges map onto these)
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,
    pub neutral: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

    /// Return the badge color for a project status: active is cyan,
    /// completed is green, on hold is amber.
    ///
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Active => self.info.to_color(),
            Status::Completed => self.success.to_color(),
            Status::OnHold => self.warning.to_color(),
        }
    }

    /// Return the badge color for a project priority: high is red, medium
    /// is amber, low is green.
    ///
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.error.to_color(),
            Priority::Medium => self.warning.to_color(),
            Priority::Low => self.success.to_color(),
        }
    }

    /// Names of all built-in themes.
    ///
    pub fn available_themes() -> Vec<&'static str> {
        vec!["tokyo-night", "rose-pine-dawn"]
    }

    /// Look up a built-in theme by name.
    ///
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            banner: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            }, // Purple
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Subtext
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Amber
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Cyan
            neutral: ColorSpec {
                r: 120,
                g: 124,
                b: 153,
            }, // Gray
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            highlight_bg: ColorSpec {
                r: 41,
                g: 46,
                b: 66,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 144,
                g: 122,
                b: 169,
            }, // Iris
            banner: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            }, // Rose
            text: ColorSpec {
                r: 87,
                g: 82,
                b: 121,
            }, // Text
            text_secondary: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            }, // Subtle
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            success: ColorSpec {
                r: 40,
                g: 105,
                b: 131,
            }, // Pine
            warning: ColorSpec {
                r: 234,
                g: 157,
                b: 52,
            }, // Gold
            error: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            }, // Love
            info: ColorSpec {
                r: 86,
                g: 148,
                b: 159,
            }, // Foam
            neutral: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            border_active: ColorSpec {
                r: 144,
                g: 122,
                b: 169,
            }, // Iris
            border_normal: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            highlight_bg: ColorSpec {
                r: 223,
                g: 218,
                b: 217,
            }, // Highlight
            highlight_fg: ColorSpec {
                r: 87,
                g: 82,
                b: 121,
            }, // Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves_by_name() {
        for name in Theme::available_themes() {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::by_name("does-not-exist").is_none());
    }

    #[test]
    fn badge_colors_follow_the_fixed_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.status_color(Status::Active), theme.info.to_color());
        assert_eq!(
            theme.status_color(Status::Completed),
            theme.success.to_color()
        );
        assert_eq!(theme.status_color(Status::OnHold), theme.warning.to_color());
        assert_eq!(theme.priority_color(Priority::High), theme.error.to_color());
        assert_eq!(
            theme.priority_color(Priority::Medium),
            theme.warning.to_color()
        );
        assert_eq!(
            theme.priority_color(Priority::Low),
            theme.success.to_color()
        );
    }
}
