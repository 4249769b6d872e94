//! Colour theme for the quakeview TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.
//!
//! # Magnitude bands
//!
//! Rows are coloured by the record's best magnitude (see
//! [`EventRecord::magnitude`](quakeview_core::EventRecord::magnitude)):
//! below 3.0 is *minor*, below 4.0 *light*, below 5.0 *moderate*, and
//! anything larger *strong*.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let modifier = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        let mut style = Style::default().add_modifier(modifier);
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawMagnitude {
    unknown: RawStyle,
    minor: RawStyle,
    light: RawStyle,
    moderate: RawStyle,
    strong: RawStyle,
}

impl RawMagnitude {
    /// Styles in [`Band`] order.
    fn into_styles(self) -> [Style; 5] {
        [self.unknown, self.minor, self.light, self.moderate, self.strong].map(RawStyle::into_style)
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    title: RawStyle,
    subtitle: RawStyle,
    note: RawStyle,
    columns: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    magnitude: RawMagnitude,
    borders: RawBorders,
    search: RawSearch,
    header: RawHeader,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Magnitude band used to pick a row style. The discriminant indexes
/// [`Theme::magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Unknown = 0,
    Minor,
    Light,
    Moderate,
    Strong,
}

impl Band {
    pub fn of(magnitude: Option<f64>) -> Self {
        match magnitude {
            None => Band::Unknown,
            Some(m) if m < 3.0 => Band::Minor,
            Some(m) if m < 4.0 => Band::Light,
            Some(m) if m < 5.0 => Band::Moderate,
            Some(_) => Band::Strong,
        }
    }
}

/// Resolved quakeview styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Row styles, one per [`Band`].
    pub magnitude: [Style; 5],

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for the command bar.
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Inline highlight applied to the filter term inside a location.
    pub search_highlight: Style,

    pub header_title: Style,
    pub header_subtitle: Style,
    pub header_note: Style,
    /// Table column captions.
    pub header_columns: Style,
}

impl Theme {
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme by name; unknown names fall back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from TOML. Unknown keys are ignored; unknown colour
    /// names leave that colour unset.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            magnitude: raw.magnitude.into_styles(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            header_title: raw.header.title.into_style(),
            header_subtitle: raw.header.subtitle.into_style(),
            header_note: raw.header.note.into_style(),
            header_columns: raw.header.columns.into_style(),
        })
    }

    /// Row style for a record's best magnitude.
    pub fn magnitude_style(&self, magnitude: Option<f64>) -> Style {
        self.magnitude[Band::of(magnitude) as usize]
    }
}

/// Colour names as ratatui spells them (`light_red`, `dark_gray`, `#rrggbb`,
/// or a bare 256-colour index).
fn parse_color(s: &str) -> Option<Color> {
    let color = s.parse().ok();
    if color.is_none() {
        tracing::warn!(color = s, "unknown theme colour ignored");
    }
    color
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
