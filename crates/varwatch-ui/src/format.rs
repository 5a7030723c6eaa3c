use crate::model::Value;

/// Pill value text: integers as-is, other numbers to `decimals` places with a
/// `.00` dropped, text verbatim.
pub fn pill_value_text(value: &Value, decimals: usize) -> String {
    match value.as_number() {
        Some(n) if n.fract() == 0.0 => n.to_string(),
        Some(n) => format!("{n:.decimals$}").replacen(".00", "", 1),
        None => match value {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
        },
    }
}

/// Slider value text. Float-mode sliders always show at least two decimals.
pub fn slider_value_text(value: f64, float_mode: bool) -> String {
    let mut s = value.to_string();
    if float_mode && value.is_finite() {
        match s.find('.') {
            None => s.push_str(".00"),
            Some(dot) => {
                let digits = s.len() - dot - 1;
                for _ in digits..2 {
                    s.push('0');
                }
            }
        }
    }
    s
}
