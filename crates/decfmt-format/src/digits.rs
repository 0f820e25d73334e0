//! Decimal digit buffer for rounding and output assembly
//!
//! A `DigitList` holds the significant decimal digits of a finite value
//! together with the decimal point position, so rounding decisions are made
//! digit by digit instead of in binary floating point. Digits come from the
//! value's shortest decimal representation, the same text a test would
//! write the value as.

use decfmt_ast::RoundingMode;
use std::cmp::Ordering;

/// Value = 0.d1 d2 … dn × 10^point, with sign carried separately
///
/// The digit vector never has trailing zeros; zero is the empty vector.
/// Negative zero keeps `negative` set with no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitList {
    pub negative: bool,
    pub digits: Vec<u8>,
    pub point: i32,
}

impl DigitList {
    /// Decompose a finite `f64` into decimal digits
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        let negative = value.is_sign_negative();
        let magnitude = value.abs();
        if magnitude == 0.0 {
            return Self {
                negative,
                digits: Vec::new(),
                point: 0,
            };
        }

        // Shortest round-trip representation: "d.dddde±x"
        let repr = format!("{magnitude:e}");
        let (mantissa, exp_str) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exp: i32 = exp_str.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }

        Self {
            negative,
            digits,
            point: exp + 1,
        }
    }

    /// Decompose an integer (already scaled by any multiplier)
    #[must_use]
    pub fn from_i128(value: i128) -> Self {
        let negative = value < 0;
        if value == 0 {
            return Self {
                negative: false,
                digits: Vec::new(),
                point: 0,
            };
        }

        let text = value.unsigned_abs().to_string();
        let point = text.len() as i32;
        let mut digits: Vec<u8> = text.bytes().map(|b| b - b'0').collect();
        while digits.last() == Some(&0) {
            digits.pop();
        }

        Self {
            negative,
            digits,
            point,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at index, with implied zeros outside the stored range
    ///
    /// Index 0 is the most significant stored digit; integer positions run
    /// `0..point`, fraction position `j` is index `point + j`.
    #[must_use]
    pub fn digit(&self, index: i32) -> u8 {
        if index < 0 {
            return 0;
        }
        self.digits.get(index as usize).copied().unwrap_or(0)
    }

    /// Round so at most `max_fraction` digits remain after the point
    pub fn round_to_fraction(&mut self, max_fraction: usize, mode: RoundingMode) {
        self.round_at(self.point + max_fraction as i32, mode);
    }

    /// Round to at most `significant` leading digits
    pub fn round_to_significant(&mut self, significant: usize, mode: RoundingMode) {
        self.round_at(significant as i32, mode);
    }

    /// Round at digit index `keep` (may be zero or negative)
    ///
    /// Keeps the first `keep` digits and resolves the discarded remainder
    /// under `mode`. The remainder is never zero here: trailing zeros are
    /// already trimmed, so any discarded digits carry value.
    fn round_at(&mut self, keep: i32, mode: RoundingMode) {
        let total = self.digits.len() as i32;
        if keep >= total {
            return;
        }

        let (first_discarded, rest_nonzero) = if keep < 0 {
            // Implied zeros sit between the rounding position and the
            // stored digits, so the remainder is below one half
            (0u8, true)
        } else {
            let k = keep as usize;
            (self.digits[k], self.digits[k + 1..].iter().any(|&d| d != 0))
        };

        let versus_half = match first_discarded.cmp(&5) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => {
                if rest_nonzero {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        };
        let last_kept_odd = keep > 0 && self.digits[keep as usize - 1] % 2 == 1;

        let round_away = match mode {
            RoundingMode::Ceiling => !self.negative,
            RoundingMode::Floor => self.negative,
            RoundingMode::Down => false,
            RoundingMode::Up => true,
            RoundingMode::HalfEven => {
                versus_half == Ordering::Greater
                    || (versus_half == Ordering::Equal && last_kept_odd)
            }
            RoundingMode::HalfDown => versus_half == Ordering::Greater,
            RoundingMode::HalfUp => versus_half != Ordering::Less,
        };

        if keep <= 0 {
            self.digits.clear();
        } else {
            self.digits.truncate(keep as usize);
        }

        if round_away {
            if self.digits.is_empty() {
                // One unit at the rounding position
                self.digits.push(1);
                self.point = self.point - keep + 1;
            } else {
                let mut i = self.digits.len();
                loop {
                    if i == 0 {
                        self.digits.insert(0, 1);
                        self.point += 1;
                        break;
                    }
                    i -= 1;
                    if self.digits[i] == 9 {
                        self.digits[i] = 0;
                    } else {
                        self.digits[i] += 1;
                        break;
                    }
                }
            }
        }

        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }
}
