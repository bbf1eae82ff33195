use std::fmt;
use std::str::FromStr;

/// Floor area in square meters with fixed two-digit precision.
///
/// Stored as integer hundredths so values survive round-trips exactly.
/// Rendered and serialized in the canonical `"25.50"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloorArea(i64);

impl FloorArea {
    pub fn from_hundredths(value: i64) -> Self {
        Self(value)
    }

    pub fn hundredths(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FloorArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl FromStr for FloorArea {
    type Err = String;

    /// Parse a decimal area, rounding half-up past two fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (negative, body) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(format!("invalid floor area: {s:?}"));
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(format!("invalid floor area: {s:?}"));
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| format!("floor area out of range: {s:?}"))?
        };
        let mut frac_digits = frac_part.chars().map(|c| i64::from(c as u8 - b'0'));
        let mut hundredths = frac_digits.next().unwrap_or(0) * 10 + frac_digits.next().unwrap_or(0);
        if frac_digits.next().unwrap_or(0) >= 5 {
            hundredths += 1;
        }
        let magnitude = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(hundredths))
            .ok_or_else(|| format!("floor area out of range: {s:?}"))?;
        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl serde::Serialize for FloorArea {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FloorArea {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
