//! Time entry with an optional AM/PM selector.
//!
//! Formats use the familiar `hh:mm` / `HH:mm` token style and are
//! translated to chrono format strings once, when the picker is built.
//! A format containing `H` or `k` makes the picker twenty-four-hour;
//! anything else shows the AM/PM radio buttons.

use chrono::{Duration, NaiveTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::error::{ComponentError, Result};
use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "TimePicker";
pub const DEFAULT_FORMAT: &str = "hh:mm";

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        border: Some(theme.palette.border),
        accent: Some(theme.palette.primary.border),
        muted: Some(theme.palette.gray_light_text),
        ..ComponentStyle::default()
    }
}

/// A token-style time format and its chrono translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
    display: String,
    parse: String,
    twenty_four_hour: bool,
    // `hh` without a meridiem is read with `%H`, so cap it by hand
    max_hour: u32,
}

impl TimeFormat {
    pub fn new(pattern: &str) -> Result<Self> {
        let twenty_four_hour = pattern.contains(['H', 'k']);
        let has_meridiem = pattern.contains(['A', 'a']);

        let mut display = String::new();
        let mut parse = String::new();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                let literal = if c == '%' { "%%".to_string() } else { c.to_string() };
                display.push_str(&literal);
                parse.push_str(&literal);
                continue;
            }

            let mut token = c.to_string();
            while chars.peek() == Some(&c) {
                token.push(c);
                chars.next();
            }

            let (shown, parsed) = match token.as_str() {
                "H" | "HH" | "k" | "kk" => ("%H", "%H"),
                // Without a meridiem the hour is read as written, 12 stays noon
                "h" | "hh" if has_meridiem => ("%I", "%I"),
                "h" | "hh" => ("%I", "%H"),
                "m" | "mm" => ("%M", "%M"),
                "s" | "ss" => ("%S", "%S"),
                "A" => ("%p", "%p"),
                "a" => ("%P", "%p"),
                _ => {
                    return Err(ComponentError::UnsupportedTimeFormat {
                        token,
                        format: pattern.to_string(),
                    })
                }
            };
            display.push_str(shown);
            parse.push_str(parsed);
        }

        let max_hour = if twenty_four_hour || has_meridiem { 23 } else { 12 };
        Ok(Self {
            pattern: pattern.to_string(),
            display,
            parse,
            twenty_four_hour,
            max_hour,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn is_twenty_four_hour(&self) -> bool {
        self.twenty_four_hour
    }

    #[must_use]
    pub fn format(&self, time: NaiveTime) -> String {
        time.format(&self.display).to_string()
    }

    /// Parse `text`. Twelve-hour formats reject hours above 12.
    pub fn parse(&self, text: &str) -> Result<NaiveTime> {
        let invalid = || ComponentError::InvalidTime {
            text: text.to_string(),
            format: self.pattern.clone(),
        };
        let time = NaiveTime::parse_from_str(text.trim(), &self.parse).map_err(|_| invalid())?;
        if time.hour() > self.max_hour {
            return Err(invalid());
        }
        Ok(time)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_FORMAT.to_string(),
            display: "%I:%M".to_string(),
            parse: "%H:%M".to_string(),
            twenty_four_hour: false,
            max_hour: 12,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimePicker {
    name: String,
    format: TimeFormat,
    value: Option<NaiveTime>,
    internal_value: Option<NaiveTime>,
    disabled: bool,
    buffer: String,
    editing: bool,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl TimePicker {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: default_style(&Theme::default()),
            ..Self::default()
        }
    }

    /// Use a token-style format such as `HH:mm` or `hh:mm A`.
    pub fn with_format(mut self, pattern: &str) -> Result<Self> {
        self.format = TimeFormat::new(pattern)?;
        Ok(self)
    }

    /// Control the value from outside; `None` returns control to the picker.
    pub fn set_value(&mut self, value: Option<NaiveTime>) {
        self.value = value;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.cancel_edit();
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn format(&self) -> &TimeFormat {
        &self.format
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_twenty_four_hour(&self) -> bool {
        self.format.is_twenty_four_hour()
    }

    /// The controlled value if one is set, otherwise the picker's own.
    #[must_use]
    pub fn value(&self) -> Option<NaiveTime> {
        self.value.or(self.internal_value)
    }

    /// Whether the current value falls before noon. An empty picker reads as AM.
    #[must_use]
    pub fn is_am(&self) -> bool {
        self.value().map_or(true, |time| time.hour() <= 11)
    }

    /// Text shown in the input.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.editing {
            return self.buffer.clone();
        }
        self.value()
            .map(|time| self.format.format(time))
            .unwrap_or_default()
    }

    /// Parse `text` and reconcile it with the AM/PM selection.
    ///
    /// Returns the new value for the change callback, or `None` when the
    /// text is empty.
    pub fn handle_on_change(&mut self, text: &str, am_selected: bool) -> Result<Option<NaiveTime>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let parsed = self.format.parse(text)?;
        Ok(Some(self.commit(parsed, am_selected)))
    }

    /// Select AM or PM, shifting the current value if it disagrees.
    pub fn set_am_pm(&mut self, am_selected: bool) -> Option<NaiveTime> {
        if self.disabled {
            return None;
        }
        let current = self.value()?;
        Some(self.commit(current, am_selected))
    }

    fn commit(&mut self, time: NaiveTime, am_selected: bool) -> NaiveTime {
        let time_is_am = time.hour() < 12;
        let shifted = if !self.is_twenty_four_hour() && am_selected != time_is_am {
            if am_selected {
                time - Duration::hours(12)
            } else {
                time + Duration::hours(12)
            }
        } else {
            time
        };

        debug!("time picker '{}' changed to {}", self.name, shifted);
        self.internal_value = Some(shifted);
        shifted
    }

    fn cancel_edit(&mut self) {
        self.buffer.clear();
        self.editing = false;
    }

    /// Edit the picker from the keyboard.
    ///
    /// Digits and separators edit the text, `a`/`p` pick AM or PM, Enter
    /// commits and Esc abandons the edit. Returns the committed value.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<NaiveTime>> {
        if self.disabled {
            return Ok(None);
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == ':' || c == ' ' => {
                if !self.editing {
                    self.buffer.clear();
                    self.editing = true;
                }
                self.buffer.push(c);
                Ok(None)
            }
            KeyCode::Char('a' | 'A') if !self.is_twenty_four_hour() => Ok(self.set_am_pm(true)),
            KeyCode::Char('p' | 'P') if !self.is_twenty_four_hour() => Ok(self.set_am_pm(false)),
            KeyCode::Backspace => {
                if !self.editing {
                    self.buffer = self.display_text();
                    self.editing = true;
                }
                self.buffer.pop();
                Ok(None)
            }
            KeyCode::Esc => {
                self.cancel_edit();
                Ok(None)
            }
            KeyCode::Enter if self.editing => {
                let text = self.buffer.clone();
                let am = self.is_am();
                let changed = self.handle_on_change(&text, am)?;
                self.cancel_edit();
                Ok(changed)
            }
            _ => Ok(None),
        }
    }
}

impl StyleTarget for TimePicker {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl Widget for &TimePicker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style;
        let base = if self.disabled { style.muted_style() } else { style.base() };

        let text = self.display_text();
        let input = if text.is_empty() {
            Span::styled(format!("[{}]", self.format.pattern()), style.muted_style())
        } else {
            Span::styled(format!("[{text}]"), base)
        };

        let mut spans = vec![input];
        if !self.is_twenty_four_hour() {
            let am = self.is_am();
            for (label, checked) in [("AM", am), ("PM", !am)] {
                let radio_style = if checked { style.accent_style() } else { base };
                spans.push(Span::raw(" "));
                spans.push(Span::styled(self.symbols.radio(checked), radio_style));
                spans.push(Span::styled(format!(" {label}"), base));
            }
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
