//! Manufacturer identifiers.

use std::fmt;

/// Manufacturer ID carried in the second octet of vendor-partition structures.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Vendor {
    /// Standard, non-proprietary structure.
    Standard,
    Motorola,
    Harris,
    /// Unrecognized manufacturer.
    Other(u8),
}

impl Vendor {
    /// Parse a manufacturer from the given 8 bits.
    pub fn from_bits(bits: u8) -> Vendor {
        use self::Vendor::*;

        match bits {
            0x00 | 0x01 => Standard,
            0x90 => Motorola,
            0xA4 => Harris,
            _ => Other(bits),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Vendor::*;

        match *self {
            Standard => write!(f, "STANDARD"),
            Motorola => write!(f, "MOTOROLA"),
            Harris => write!(f, "L3HARRIS"),
            Other(bits) => write!(f, "VENDOR {:02X}", bits),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vendor() {
        assert_eq!(Vendor::from_bits(0x00), Vendor::Standard);
        assert_eq!(Vendor::from_bits(0x01), Vendor::Standard);
        assert_eq!(Vendor::from_bits(0x90), Vendor::Motorola);
        assert_eq!(Vendor::from_bits(0xA4), Vendor::Harris);
        assert_eq!(Vendor::from_bits(0x42), Vendor::Other(0x42));
        assert_eq!(format!("{}", Vendor::Other(0x0B)), "VENDOR 0B");
    }
}
