//! Layout vocabulary and sizes shared by MAC structure decoders.
//!
//! Structure fields are described as absolute bit offsets from the first bit of the
//! structure, where octet `n` begins at bit `(n - 1) * 8`.

pub const OCTET_1_BIT_0: usize = 0;
pub const OCTET_2_BIT_8: usize = 8;
pub const OCTET_3_BIT_16: usize = 16;
pub const OCTET_4_BIT_24: usize = 24;
pub const OCTET_5_BIT_32: usize = 32;
pub const OCTET_6_BIT_40: usize = 40;
pub const OCTET_7_BIT_48: usize = 48;
pub const OCTET_8_BIT_56: usize = 56;
pub const OCTET_9_BIT_64: usize = 64;
pub const OCTET_10_BIT_72: usize = 72;
pub const OCTET_11_BIT_80: usize = 80;
pub const OCTET_12_BIT_88: usize = 88;
pub const OCTET_13_BIT_96: usize = 96;
pub const OCTET_14_BIT_104: usize = 104;
pub const OCTET_15_BIT_112: usize = 112;
pub const OCTET_16_BIT_120: usize = 120;
pub const OCTET_17_BIT_128: usize = 128;
pub const OCTET_18_BIT_136: usize = 136;
pub const OCTET_19_BIT_144: usize = 144;
pub const OCTET_20_BIT_152: usize = 152;
pub const OCTET_21_BIT_160: usize = 160;
pub const OCTET_22_BIT_168: usize = 168;
pub const OCTET_23_BIT_176: usize = 176;
pub const OCTET_24_BIT_184: usize = 184;

/// Bits in an octet.
pub const OCTET_BITS: usize = 8;
/// Octets making up the opcode and length header of a variable-length structure.
pub const HEADER_OCTETS: usize = 2;
/// Octets in a PTT or END PTT structure following the PDU header.
pub const PTT_OCTETS: usize = 17;

/// First opcode of the manufacturer-specific partition.
pub const VENDOR_PARTITION_START: u8 = 0x80;
/// Last opcode of the manufacturer-specific partition.
pub const VENDOR_PARTITION_END: u8 = 0xBF;

/// Algorithm ID denoting unencrypted traffic.
pub const ALGORITHM_UNENCRYPTED: u8 = 0x80;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_offsets() {
        assert_eq!(OCTET_1_BIT_0, 0);
        assert_eq!(OCTET_3_BIT_16, 2 * OCTET_BITS);
        assert_eq!(OCTET_24_BIT_184, 23 * OCTET_BITS);
        assert!(VENDOR_PARTITION_START < VENDOR_PARTITION_END);
    }
}
