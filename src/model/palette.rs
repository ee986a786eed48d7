use std::collections::HashMap;

pub const FALLBACK_COLOR: &str = "#888";

const CATEGORY10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];

const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];

/// Category10, Accent and Dark2 concatenated with duplicates removed.
pub fn palette_colors() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(CATEGORY10.len() + ACCENT.len() + DARK2.len());
    for &c in CATEGORY10.iter().chain(ACCENT).chain(DARK2) {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Provider to color mapping for a single render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderPalette {
    colors: HashMap<String, &'static str>,
}

impl ProviderPalette {
    /// Assigns colors by index in the given raw provider order, cycling the
    /// palette. A missing provider still takes a slot but gets no entry, so
    /// points drawn for it fall back to [`FALLBACK_COLOR`].
    pub fn assign<'a, I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let palette = palette_colors();
        let mut seen: Vec<Option<&'a str>> = Vec::new();
        let mut colors = HashMap::new();
        for provider in providers {
            if seen.contains(&provider) {
                continue;
            }
            let color = palette[seen.len() % palette.len()];
            seen.push(provider);
            if let Some(name) = provider {
                colors.insert(name.to_string(), color);
            }
        }
        Self { colors }
    }

    pub fn color(&self, provider: &str) -> &'static str {
        self.colors.get(provider).copied().unwrap_or(FALLBACK_COLOR)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
