//! Color expression validation.
//!
//! [`is_valid_color`] decides whether a string may be used as a CSS color in
//! a style record. Input is tokenized with `cssparser` and must consist of
//! exactly one of:
//!
//! - a hex color with 3, 4, 6 or 8 digits (`#fff`, `#ffffff80`)
//! - `rgb()` / `rgba()` with comma-separated or space-separated components
//! - `hsl()` / `hsla()` with comma-separated or space-separated components
//! - a named color (`rebeccapurple`), `transparent`, `currentColor`, or a
//!   CSS-wide keyword (`inherit`, `initial`, `unset`, `revert`)
//! - a custom property reference, `var(--brand)` with an optional fallback
//!
//! Leading and trailing whitespace is ignored. Anything else, including the
//! empty string, is rejected.

mod named;

use cssparser::{ParseError, Parser, ParserInput, Token};

use named::is_color_ident;

/// Returns true if `input` is a color expression.
///
/// # Example
///
/// ```rust
/// use viberante::is_valid_color;
///
/// assert!(is_valid_color("#fff"));
/// assert!(is_valid_color("rgba(0, 0, 0, 0.5)"));
/// assert!(is_valid_color("hsl(210 40% 50% / 0.8)"));
/// assert!(is_valid_color("tomato"));
/// assert!(!is_valid_color("not-a-color"));
/// assert!(!is_valid_color(""));
/// ```
pub fn is_valid_color(input: &str) -> bool {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    parse_color(&mut parser) && parser.expect_exhausted().is_ok()
}

/// Returns true if `value` is a string holding a color expression.
///
/// Non-string values (numbers, booleans, null, arrays, objects) are never colors.
pub fn is_valid_color_value(value: &serde_json::Value) -> bool {
    value.as_str().is_some_and(is_valid_color)
}

fn parse_color(input: &mut Parser<'_, '_>) -> bool {
    let token = match input.next() {
        Ok(token) => token.clone(),
        Err(_) => return false,
    };
    match token {
        Token::Hash(ref digits) | Token::IDHash(ref digits) => is_hex_color(digits),
        Token::Ident(ref name) => is_color_ident(name),
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            let result: Result<bool, ParseError<'_, ()>> =
                input.parse_nested_block(|nested| Ok(function_is_color(&name, nested)));
            result.unwrap_or(false)
        }
        _ => false,
    }
}

fn is_hex_color(digits: &str) -> bool {
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn function_is_color(name: &str, input: &mut Parser<'_, '_>) -> bool {
    match name {
        "rgb" | "rgba" => match read_components(input) {
            Some(args) => args.is_rgb(),
            None => false,
        },
        "hsl" | "hsla" => match read_components(input) {
            Some(args) => args.is_hsl(),
            None => false,
        },
        "var" => is_custom_property_reference(input),
        _ => false,
    }
}

/// `var(--name)` or `var(--name, fallback)`. The fallback is not inspected.
fn is_custom_property_reference(input: &mut Parser<'_, '_>) -> bool {
    let first = match input.next() {
        Ok(token) => token.clone(),
        Err(_) => return false,
    };
    let Token::Ident(ref name) = first else {
        return false;
    };
    if !name.starts_with("--") || name.len() < 3 {
        return false;
    }
    match input.next() {
        Err(_) => true,
        Ok(Token::Comma) => {
            while input.next().is_ok() {}
            true
        }
        Ok(_) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Number,
    Percentage,
    Angle,
    None,
}

#[derive(Debug)]
struct Components {
    values: Vec<Component>,
    commas: usize,
    slash: bool,
}

impl Components {
    /// Legacy comma syntax, or modern space syntax with `/` before alpha.
    fn has_valid_shape(&self) -> bool {
        let len = self.values.len();
        if !(3..=4).contains(&len) {
            return false;
        }
        if self.is_legacy() {
            self.commas == len - 1 && !self.slash && !self.values.contains(&Component::None)
        } else {
            self.slash == (len == 4)
        }
    }

    fn is_legacy(&self) -> bool {
        self.commas > 0
    }

    fn alpha_ok(&self) -> bool {
        match self.values.get(3) {
            Some(alpha) => matches!(
                alpha,
                Component::Number | Component::Percentage | Component::None
            ),
            None => true,
        }
    }

    fn is_rgb(&self) -> bool {
        self.has_valid_shape()
            && self.values[..3].iter().all(|c| {
                matches!(
                    c,
                    Component::Number | Component::Percentage | Component::None
                )
            })
            && self.alpha_ok()
    }

    fn is_hsl(&self) -> bool {
        if !self.has_valid_shape() {
            return false;
        }
        let hue_ok = matches!(
            self.values[0],
            Component::Number | Component::Angle | Component::None
        );
        let legacy = self.is_legacy();
        let channels_ok = self.values[1..3].iter().all(|c| match c {
            Component::Percentage => true,
            Component::Number | Component::None => !legacy,
            Component::Angle => false,
        });
        hue_ok && channels_ok && self.alpha_ok()
    }
}

/// Reads the components of a color function body. Returns `None` on any token
/// that cannot appear in one, or on a misplaced separator.
fn read_components(input: &mut Parser<'_, '_>) -> Option<Components> {
    let mut components = Components {
        values: Vec::with_capacity(4),
        commas: 0,
        slash: false,
    };
    while let Ok(token) = input.next() {
        let token = token.clone();
        match token {
            Token::Number { .. } => components.values.push(Component::Number),
            Token::Percentage { .. } => components.values.push(Component::Percentage),
            Token::Dimension { ref unit, .. } if is_angle_unit(unit) => {
                components.values.push(Component::Angle)
            }
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => {
                components.values.push(Component::None)
            }
            Token::Comma => {
                // A comma must directly follow a component.
                if components.values.len() != components.commas + 1 {
                    return None;
                }
                components.commas += 1;
            }
            Token::Delim('/') => {
                if components.slash || components.values.len() != 3 {
                    return None;
                }
                components.slash = true;
            }
            _ => return None,
        }
    }
    Some(components)
}

fn is_angle_unit(unit: &str) -> bool {
    ["deg", "rad", "grad", "turn"]
        .iter()
        .any(|u| unit.eq_ignore_ascii_case(u))
}
