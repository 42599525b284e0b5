use crossterm::style::{style, Color, Stylize};

const GREEN: Color = Color::Rgb { r: 166, g: 227, b: 161 };
const RED: Color = Color::Rgb { r: 243, g: 139, b: 168 };
const YELLOW: Color = Color::Rgb { r: 249, g: 226, b: 175 };
const ACCENT: Color = Color::Rgb { r: 137, g: 180, b: 250 };
const TEXT_DIM: Color = Color::Rgb { r: 127, g: 132, b: 156 };

/// Colours for shell output. A disabled theme returns text untouched.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    enabled: bool,
}

impl Theme {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn heading(&self, text: &str) -> String {
        if self.enabled {
            style(text).with(ACCENT).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn income(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub(crate) fn expense(&self, text: &str) -> String {
        self.paint(text, RED)
    }

    pub(crate) fn success(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub(crate) fn warning(&self, text: &str) -> String {
        self.paint(text, YELLOW)
    }

    pub(crate) fn error(&self, text: &str) -> String {
        self.paint(text, RED)
    }

    pub(crate) fn dim(&self, text: &str) -> String {
        self.paint(text, TEXT_DIM)
    }
}
