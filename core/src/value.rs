use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TokenType {
    #[serde(rename = "COLOR")]
    Color,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "STRING")]
    String,
}

/// Color with every channel as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}
impl ColorValue {
    /// Renders as `rgba(R, G, B, A)` with all four channels, alpha included, on the 0-255
    /// scale.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a]
            .map(|channel| format_number(round_to_decimals((channel * 255.0).round(), 3)));
        format!("rgba({r}, {g}, {b}, {a})")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Color(ColorValue),
    Number(f64),
    Text(String),
}

/// Formats `value` as declared by `type_`. Returns `None` when the value has a different
/// shape than the type asks for.
pub fn format_value(type_: TokenType, value: &ResolvedValue) -> Option<String> {
    match (type_, value) {
        (TokenType::Color, ResolvedValue::Color(color)) => Some(color.to_css()),
        (TokenType::Float, ResolvedValue::Number(number)) => {
            Some(format!("{}px", format_number(round_to_decimals(*number, 2))))
        }
        (TokenType::String, ResolvedValue::Text(text)) => Some(text.clone()),
        _ => None,
    }
}

pub fn round_to_decimals(num: f64, max_decimals: i32) -> f64 {
    let factor = 10f64.powi(max_decimals);
    (num * factor).round() / factor
}

// `2.0` prints as `2`, and `-0.0` as `0`.
fn format_number(num: f64) -> String {
    format!("{}", num + 0.0)
}
