//! fieldform WASM
//!
//! Exposes the input validators to browser code so inputs can validate on
//! every keystroke with the same rules the form uses.

use fieldform_validation::{InputKind, LengthBounds, VisualState};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Constraint object passed from JavaScript.
///
/// Bounds arrive as plain JS numbers, so `NaN`, `0` and negatives are
/// possible; all of them mean "no bound". Other keys (such as `required`) are
/// ignored: empty input is invalid for every kind regardless.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    #[serde(default)]
    pub min_length: Option<f64>,
    #[serde(default)]
    pub max_length: Option<f64>,
}

impl FieldRules {
    pub fn bounds(&self) -> LengthBounds {
        LengthBounds::from_numbers(self.min_length, self.max_length)
    }
}

/// Validate a value for the named input kind
///
/// # Example (JavaScript)
/// ```javascript
/// const ok = validateField('phone', '1234567890', { minLength: 10, maxLength: 10 });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(kind: &str, value: &str, rules: JsValue) -> Result<bool, JsValue> {
    let Some(kind) = InputKind::from_name(kind) else {
        let msg = format!("Unknown input kind: {}", kind);
        web_sys::console::warn_1(&JsValue::from_str(&msg));
        return Err(JsValue::from_str(&msg));
    };

    let rules: FieldRules = if rules.is_undefined() || rules.is_null() {
        FieldRules::default()
    } else {
        serde_wasm_bindgen::from_value(rules).map_err(|e| {
            let msg = format!("Failed to parse rules: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&msg));
            JsValue::from_str(&msg)
        })?
    };

    Ok(kind.validate(value, rules.bounds()))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(value: &str, min_length: Option<f64>, max_length: Option<f64>) -> bool {
    InputKind::Email.validate(value, LengthBounds::from_numbers(min_length, max_length))
}

/// Quick phone validation
#[wasm_bindgen(js_name = isValidPhone)]
pub fn is_valid_phone_js(value: &str, min_length: Option<f64>, max_length: Option<f64>) -> bool {
    InputKind::Phone.validate(value, LengthBounds::from_numbers(min_length, max_length))
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(value: &str, min_length: Option<f64>, max_length: Option<f64>) -> bool {
    InputKind::Url.validate(value, LengthBounds::from_numbers(min_length, max_length))
}

/// Class list for an input in the given validity state
#[wasm_bindgen(js_name = inputClasses)]
pub fn input_classes_js(is_valid: bool) -> String {
    VisualState::from_validity(is_valid).classes().join(" ")
}
