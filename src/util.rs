use std;

use num::One;

/// Calculate ceil(a / b).
pub fn div_ceil<T>(a: T, b: T) -> T where
    T: std::ops::Add<T, Output = T> + std::ops::Sub<T, Output = T> +
       std::ops::Div<T, Output = T> + One + Copy
{
    (a + b - T::one()) / b
}

/// Render the given BCD nibbles as dialed digits, stopping at the first filler nibble.
///
/// Nibbles 0-9 are digits, 0xA is `*` and 0xB is `#`; anything above is filler.
pub fn bcd_digits<I: IntoIterator<Item = u8>>(nibbles: I) -> String {
    nibbles.into_iter()
        .take_while(|&n| n <= 0xB)
        .map(|n| match n {
            0xA => '*',
            0xB => '#',
            d => (b'0' + d) as char,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_div_ceil() {
        assert_eq!(div_ceil(13, 12), 2);
        assert_eq!(div_ceil(1, 2), 1);
        assert_eq!(div_ceil(0, 3), 0);
    }

    #[test]
    fn test_bcd_digits() {
        assert_eq!(bcd_digits(vec![5, 5, 5, 1, 2, 1, 2]), "5551212");
        assert_eq!(bcd_digits(vec![9, 1, 1, 0xF, 0xF]), "911");
        assert_eq!(bcd_digits(vec![0xA, 0, 0xB]), "*0#");
    }
}
