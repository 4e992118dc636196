//! The stamp alphabet and the counter encoding built on it.
//!
//! Every byte written into a stamp suffix comes from [`ALPHABET`]. The
//! position of a symbol in the alphabet doubles as its digit value when
//! the version 1 counter is encoded, so the counter base is the alphabet
//! length: 65, since `=` follows the 64 base64 symbols.

use rand::Rng;

/// Symbols used for random fill and counter digits, in digit order.
pub const ALPHABET: [u8; 65] =
    *b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+/=";

/// Counter base, equal to the alphabet size.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Digits needed to encode `u64::MAX` in [`BASE`].
pub const MAX_COUNTER_DIGITS: usize = 11;

/// Pick one alphabet symbol uniformly at random.
pub fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    ALPHABET[rng.gen_range(0..ALPHABET.len())]
}

/// Digit value of an alphabet symbol, or `None` if the byte is not in the alphabet.
pub fn symbol_index(symbol: u8) -> Option<usize> {
    ALPHABET.iter().position(|&s| s == symbol)
}

/// A counter value rendered as alphabet symbols, least-significant digit first.
///
/// Backed by a fixed array sized for any `u64`, so re-encoding in the
/// search loop never allocates. Zero encodes to an empty digit sequence.
///
/// Equality compares the encoded digits only; slots past `len` are stale.
#[derive(Clone, Copy)]
pub struct CounterDigits {
    digits: [u8; MAX_COUNTER_DIGITS],
    len: usize,
}

impl CounterDigits {
    /// An empty digit sequence (the encoding of zero).
    pub const fn new() -> Self {
        Self {
            digits: [0u8; MAX_COUNTER_DIGITS],
            len: 0,
        }
    }

    /// Encode `value` into a fresh digit sequence.
    pub fn encode(value: u64) -> Self {
        let mut digits = Self::new();
        digits.set(value);
        digits
    }

    /// Re-encode in place, overwriting the previous value.
    pub fn set(&mut self, value: u64) {
        let mut quotient = value;
        let mut position = 0;
        while quotient != 0 {
            let remainder = (quotient % BASE) as usize;
            self.digits[position] = ALPHABET[remainder];
            quotient /= BASE;
            position += 1;
        }
        self.len = position;
    }

    /// The encoded symbols.
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Number of digits in the current encoding.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the encoded value is zero.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode back to the counter value.
    ///
    /// Returns `None` if a digit is not an alphabet symbol.
    pub fn decode(symbols: &[u8]) -> Option<u64> {
        symbols.iter().rev().try_fold(0u64, |acc, &symbol| {
            let digit = symbol_index(symbol)? as u64;
            acc.checked_mul(BASE)?.checked_add(digit)
        })
    }
}

impl PartialEq for CounterDigits {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for CounterDigits {}

impl Default for CounterDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CounterDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CounterDigits({})", String::from_utf8_lossy(self.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_symbols_unique() {
        for (i, a) in ALPHABET.iter().enumerate() {
            for b in &ALPHABET[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_zero_encodes_empty() {
        let digits = CounterDigits::encode(0);
        assert!(digits.is_empty());
        assert_eq!(digits.as_bytes(), b"");
    }

    #[test]
    fn test_encode_least_significant_first() {
        assert_eq!(CounterDigits::encode(1).as_bytes(), b"1");
        assert_eq!(CounterDigits::encode(10).as_bytes(), b"a");
        assert_eq!(CounterDigits::encode(63).as_bytes(), b"/");
        assert_eq!(CounterDigits::encode(64).as_bytes(), b"=");
        // 65 = 0 * 65^0 + 1 * 65^1
        assert_eq!(CounterDigits::encode(65).as_bytes(), b"01");
        // 4226 = 1 + 0 * 65 + 1 * 65^2
        assert_eq!(CounterDigits::encode(4226).as_bytes(), b"101");
    }

    #[test]
    fn test_u64_max_fits() {
        let digits = CounterDigits::encode(u64::MAX);
        assert_eq!(digits.len(), MAX_COUNTER_DIGITS);
        assert_eq!(CounterDigits::decode(digits.as_bytes()), Some(u64::MAX));
    }

    #[test]
    fn test_set_shrinks_length() {
        let mut digits = CounterDigits::encode(1 << 40);
        digits.set(5);
        assert_eq!(digits.as_bytes(), b"5");
    }

    #[test]
    fn test_equality_ignores_stale_digits() {
        let mut shrunk = CounterDigits::encode(1 << 40);
        shrunk.set(5);
        assert_eq!(shrunk, CounterDigits::encode(5));

        shrunk.set(0);
        assert_eq!(shrunk, CounterDigits::new());
        assert_ne!(shrunk, CounterDigits::encode(1));
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        assert_eq!(CounterDigits::decode(b"1:"), None);
    }

    #[test]
    fn test_random_symbol_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(symbol_index(random_symbol(&mut rng)).is_some());
        }
    }
}
