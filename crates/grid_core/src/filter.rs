//! Filter popover: visibility, the form behind it, and value parsing.

use thiserror::Error;

/// Screen position of the element that toggled the popover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverAnchor {
    pub x: f32,
    pub y: f32,
}

impl PopoverAnchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Open/closed state of the filter popover. Nothing else lives here: the
/// popover only closes through another toggle, never on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPopover {
    anchor: Option<PopoverAnchor>,
}

impl FilterPopover {
    pub fn toggle(&mut self, anchor: PopoverAnchor) {
        self.anchor = match self.anchor {
            Some(_) => None,
            None => Some(anchor),
        };
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<PopoverAnchor> {
        self.anchor
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Value is required")]
    Required,
}

/// Values handed to the controller by a successful form submit. Only
/// constructible with a non-empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFormValues {
    raw_input: String,
}

impl FilterFormValues {
    pub fn new(raw_input: impl Into<String>) -> Result<Self, FormError> {
        let raw_input = raw_input.into();
        if raw_input.is_empty() {
            return Err(FormError::Required);
        }
        Ok(Self { raw_input })
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }
}

/// Single required numeric input behind the popover.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    input: String,
    error: Option<FormError>,
}

impl FilterForm {
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Runs the required-field check. The input is kept after a successful
    /// submit, like a browser form that is not reset.
    pub fn submit(&mut self) -> Result<FilterFormValues, FormError> {
        match FilterFormValues::new(self.input.clone()) {
            Ok(values) => {
                self.error = None;
                Ok(values)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

/// Integer parse with `parseInt` leniency: leading whitespace, an optional
/// sign, then the longest run of ASCII digits. Returns `None` when there are no
/// digits or the value does not fit in an `i64`.
pub fn parse_integer_prefix(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
