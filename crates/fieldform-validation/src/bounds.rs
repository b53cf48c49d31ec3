//! Length bounds shared by every input kind

/// Optional minimum and maximum input length.
///
/// A bound of `0` is treated the same as no bound at all, so `min_length: Some(0)`
/// never rejects anything. Callers that need a real zero bound have no way to
/// express it; this matches how inputs have always behaved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl LengthBounds {
    /// Bounds that accept any length.
    pub const NONE: LengthBounds = LengthBounds {
        min_length: None,
        max_length: None,
    };

    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Build bounds from loosely typed numbers (e.g. values handed over from JavaScript).
    ///
    /// `NaN`, infinities, zero and negative numbers all disable the bound.
    /// Fractional bounds round towards the values they admit: a minimum of
    /// `2.5` requires 3 units, a maximum of `10.5` allows 10.
    pub fn from_numbers(min_length: Option<f64>, max_length: Option<f64>) -> Self {
        Self {
            min_length: min_length.and_then(|n| number_to_bound(n, f64::ceil)),
            max_length: max_length.and_then(|n| number_to_bound(n, f64::floor)),
        }
    }

    /// The minimum that is actually enforced.
    pub fn effective_min(&self) -> Option<usize> {
        self.min_length.filter(|&min| min > 0)
    }

    /// The maximum that is actually enforced.
    pub fn effective_max(&self) -> Option<usize> {
        self.max_length.filter(|&max| max > 0)
    }

    /// Checks `value` against both bounds.
    pub fn contains(&self, value: &str) -> bool {
        let length = input_length(value);

        if let Some(min) = self.effective_min() {
            if length < min {
                return false;
            }
        }

        if let Some(max) = self.effective_max() {
            if length > max {
                return false;
            }
        }

        true
    }
}

/// Length of an input value in UTF-16 code units, which is how browsers
/// measure `minlength`/`maxlength`.
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn number_to_bound(n: f64, round: fn(f64) -> f64) -> Option<usize> {
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    Some(round(n) as usize)
}
