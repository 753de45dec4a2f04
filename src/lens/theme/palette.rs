//! Style strings to terminal styles
//!
//! Style attributes come from configuration as short phrases such as
//! `"bold white on blue"`. Words that are not understood are ignored, and a
//! disabled palette paints nothing, so output degrades to plain text.

use crate::config::StyleConfig;
use owo_colors::{AnsiColors, Rgb, Style};

/// Named style slot used by the themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Header,
    FieldName,
    FieldValue,
    Error,
    PanelBorder,
    /// Emphasis for titles and the subject address
    Strong,
    /// Separators
    Faint,
}

/// Resolved styles for one render
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
    header: Style,
    field_name: Style,
    field_value: Style,
    error: Style,
    panel_border: Style,
}

impl Palette {
    pub fn new(style: &StyleConfig, enabled: bool) -> Self {
        Self {
            enabled,
            header: parse_style(&style.header),
            field_name: parse_style(&style.field_name),
            field_value: parse_style(&style.field_value),
            error: parse_style(&style.error),
            panel_border: parse_style(&style.panel_border),
        }
    }

    /// Palette that never emits escape codes
    pub fn plain() -> Self {
        Self::new(&StyleConfig::default(), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self, role: StyleRole) -> Style {
        match role {
            StyleRole::Header => self.header,
            StyleRole::FieldName => self.field_name,
            StyleRole::FieldValue => self.field_value,
            StyleRole::Error => self.error,
            StyleRole::PanelBorder => self.panel_border,
            StyleRole::Strong => Style::new().bold(),
            StyleRole::Faint => Style::new().dimmed(),
        }
    }

    /// Apply `role` to `text`, or return it untouched when disabled
    pub fn paint(&self, role: StyleRole, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        self.style(role).style(text).to_string()
    }
}

/// Parse a phrase like `"bold white on blue"` or `"#ff8800"`.
pub fn parse_style(phrase: &str) -> Style {
    let mut style = Style::new();
    let mut background = false;

    for word in phrase.split_whitespace() {
        let word = word.to_lowercase();
        match word.as_str() {
            "on" => {
                background = true;
                continue;
            }
            "bold" => style = style.bold(),
            "dim" => style = style.dimmed(),
            "italic" => style = style.italic(),
            "underline" => style = style.underline(),
            "reverse" => style = style.reversed(),
            "strike" => style = style.strikethrough(),
            _ => {
                if let Some(rgb) = parse_hex(&word) {
                    style = if background {
                        style.on_color(rgb)
                    } else {
                        style.color(rgb)
                    };
                } else if let Some(color) = parse_color_name(&word) {
                    style = if background {
                        style.on_color(color)
                    } else {
                        style.color(color)
                    };
                }
            }
        }
        background = false;
    }

    style
}

fn parse_color_name(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "default" => AnsiColors::Default,
        "bright_black" | "grey" | "gray" => AnsiColors::BrightBlack,
        "bright_red" => AnsiColors::BrightRed,
        "bright_green" => AnsiColors::BrightGreen,
        "bright_yellow" => AnsiColors::BrightYellow,
        "bright_blue" => AnsiColors::BrightBlue,
        "bright_magenta" => AnsiColors::BrightMagenta,
        "bright_cyan" => AnsiColors::BrightCyan,
        "bright_white" => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

fn parse_hex(word: &str) -> Option<Rgb> {
    let hex = word.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb(r, g, b))
}
