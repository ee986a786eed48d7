use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => ThemeColors {
                text: "#374151",
                grid: "#e5e7eb",
                background: "#ffffff",
                tooltip_background: "#ffffff",
                tooltip_border: "#d1d5db",
                legend_border: "#e5e7eb",
                legend_hover: "#f3f4f6",
            },
            Theme::Dark => ThemeColors {
                text: "#d1d5db",
                grid: "#2a2a2a",
                background: "#171717",
                tooltip_background: "#1f2937",
                tooltip_border: "#374151",
                legend_border: "#2a2a2a",
                legend_hover: "#2a2a2a",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub text: &'static str,
    pub grid: &'static str,
    pub background: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub legend_border: &'static str,
    pub legend_hover: &'static str,
}
