//! Decimal fields of the serial commands.
//!
//! The switch number and the COL colors are fixed width, the other numbers are read leniently.

/// First byte as a single digit. Anything that is not a digit ends up out of the 0..=9 range.
pub fn digit(token: &[u8]) -> Option<u8> {
    token.first().map(|c| c.wrapping_sub(b'0'))
}

/// Exactly three ASCII digits, `000` to `255`.
pub fn three_digits(token: &[u8]) -> Option<u8> {
    let [d0, d1, d2] = token else {
        return None;
    };
    if !token.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value = (d0 - b'0') as u16 * 100 + (d1 - b'0') as u16 * 10 + (d2 - b'0') as u16;
    u8::try_from(value).ok()
}

/// Leading whitespace, an optional sign, then as many digits as there are. No digits is 0 and
/// overflow wraps.
pub fn decimal(token: &[u8]) -> i32 {
    let mut bytes = token
        .iter()
        .copied()
        .skip_while(u8::is_ascii_whitespace)
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let value = bytes
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, d| acc.wrapping_mul(10).wrapping_add((d - b'0') as i32));

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// [`decimal`] truncated to a byte, so `256` is `0` and `-1` is `255`.
pub fn decimal_u8(token: &[u8]) -> u8 {
    decimal(token) as u8
}

#[cfg(test)]
#[path = "number_test.rs"]
mod test;
