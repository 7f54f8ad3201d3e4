use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

/// Named styles, e.g. `"toast_error": "bold white on red"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();
        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style by name, falling back to the terminal default
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim_start();
    let s = s.trim_end();
    if s.contains("bright color") {
        let s = s.trim_start_matches("bright ");
        let c = s
            .trim_start_matches("color")
            .parse::<u8>()
            .unwrap_or_default();
        Some(Color::Indexed(c.wrapping_shl(8)))
    } else if s.contains("color") {
        let c = s
            .trim_start_matches("color")
            .parse::<u8>()
            .unwrap_or_default();
        Some(Color::Indexed(c))
    } else if s.contains("gray") {
        let c = 232
            + s.trim_start_matches("gray")
                .parse::<u8>()
                .unwrap_or_default();
        Some(Color::Indexed(c))
    } else if s.contains("rgb") {
        let red = (s.as_bytes()[3] as char).to_digit(10).unwrap_or_default() as u8;
        let green = (s.as_bytes()[4] as char).to_digit(10).unwrap_or_default() as u8;
        let blue = (s.as_bytes()[5] as char).to_digit(10).unwrap_or_default() as u8;
        let c = 16 + red * 36 + green * 6 + blue;
        Some(Color::Indexed(c))
    } else {
        match s {
            "black" => Some(Color::Indexed(0)),
            "red" => Some(Color::Indexed(1)),
            "green" => Some(Color::Indexed(2)),
            "yellow" => Some(Color::Indexed(3)),
            "blue" => Some(Color::Indexed(4)),
            "magenta" => Some(Color::Indexed(5)),
            "cyan" => Some(Color::Indexed(6)),
            "white" => Some(Color::Indexed(7)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Style::default());
    }

    #[test]
    fn test_parse_style_foreground() {
        let style = parse_style("red");
        assert_eq!(style.fg, Some(Color::Indexed(1)));
    }

    #[test]
    fn test_parse_style_background() {
        let style = parse_style("on blue");
        assert_eq!(style.bg, Some(Color::Indexed(4)));
    }

    #[test]
    fn test_parse_style_modifiers() {
        let style = parse_style("bold white on red");
        assert_eq!(style.fg, Some(Color::Indexed(7)));
        assert_eq!(style.bg, Some(Color::Indexed(1)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_parse_color_rgb_and_gray() {
        assert_eq!(parse_color("rgb123"), Some(Color::Indexed(16 + 36 + 12 + 3)));
        assert_eq!(parse_color("gray10"), Some(Color::Indexed(242)));
        assert_eq!(parse_color("color42"), Some(Color::Indexed(42)));
        assert_eq!(parse_color("unknown"), None);
    }

    #[test]
    fn test_get_or_default() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "title": "bold yellow" }"#)?;
        assert_eq!(styles.get_or_default("title").fg, Some(Color::Indexed(3)));
        assert_eq!(styles.get_or_default("missing"), Style::default());
        Ok(())
    }
}
