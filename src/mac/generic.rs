//! Structures carrying no protocol fields: padding, unrecognized opcodes, and payloads
//! that failed their CRC.

use std::fmt;

use ident::{Identifier, Vendor};
use mac::fields::MacFields;
use mac::opcode::MacOpcode;
use mac::structure::MacStructure;

structure! {
    /// Padding filling the remainder of a PDU.
    pub struct NullInformation;
}

impl MacStructure for NullInformation {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for NullInformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NULL INFORMATION")
    }
}

structure! {
    /// Variable-length padding chosen to avoid a DC bias in the modulated burst.
    pub struct NullAvoidZeroBias;
}

impl MacStructure for NullAvoidZeroBias {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for NullAvoidZeroBias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NULL AVOID ZERO BIAS LENGTH:{}", self.length())
    }
}

structure! {
    /// Structure with an unassigned standard opcode.
    pub struct UnknownStructure;
}

impl MacStructure for UnknownStructure {
    fn fields(&self) -> &MacFields { &self.0 }
    fn opcode(&self) -> MacOpcode { MacOpcode::Unknown(self.0.opcode_bits()) }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for UnknownStructure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNKNOWN STRUCTURE OPCODE:{}", self.0.opcode_bits())
    }
}

structure! {
    /// Structure in the upper opcode half with no decoder for its opcode and vendor.
    pub struct UnknownVendorStructure;
}

impl UnknownVendorStructure {
    /// Raw opcode octet.
    pub fn opcode_bits(&self) -> u8 { self.0.opcode_bits() }
    /// Raw vendor octet.
    pub fn vendor_bits(&self) -> u8 { self.0.vendor_bits() }
    /// Manufacturer named by the vendor octet.
    pub fn vendor(&self) -> Vendor { self.0.vendor() }
}

impl MacStructure for UnknownVendorStructure {
    fn fields(&self) -> &MacFields { &self.0 }

    fn opcode(&self) -> MacOpcode {
        MacOpcode::UnknownVendor {
            opcode: self.opcode_bits(),
            vendor: self.vendor_bits(),
        }
    }

    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for UnknownVendorStructure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UNKNOWN {} [{:02X}] OPCODE:{}", self.vendor(), self.vendor_bits(),
            self.opcode_bits())
    }
}

structure! {
    /// Payload the FEC stage flagged as failing its CRC. None of its bits are trusted,
    /// so no fields are ever decoded from it.
    pub struct CrcFailure;
}

impl MacStructure for CrcFailure {
    fn fields(&self) -> &MacFields { &self.0 }
    fn opcode(&self) -> MacOpcode { MacOpcode::CrcFailure }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for CrcFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CRC FAILURE CORRECTED:{}", self.0.buffer().corrected())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bits::BitBuffer;
    use mac::fields::MacFields;

    #[test]
    fn test_unknown_vendor() {
        let s = UnknownVendorStructure::new(MacFields::from_hex("B7420A00000000000000").unwrap());
        assert_eq!(s.opcode(), MacOpcode::UnknownVendor { opcode: 0xB7, vendor: 0x42 });
        assert_eq!(s.vendor(), Vendor::Other(0x42));
        assert_eq!(s.length(), 10);
        assert!(s.identifiers().is_empty());
        assert_eq!(format!("{}", s), "UNKNOWN VENDOR 42 [42] OPCODE:183");
    }

    #[test]
    fn test_unknown() {
        let s = UnknownStructure::new(MacFields::from_hex("04FFFF").unwrap());
        assert_eq!(s.opcode(), MacOpcode::Unknown(4));
        assert_eq!(s.length(), 3);
        assert_eq!(format!("{}", s), "UNKNOWN STRUCTURE OPCODE:4");
    }

    #[test]
    fn test_crc_failure() {
        let buf = BitBuffer::from_hex("C0FFFFFF").unwrap().with_crc_failed().with_corrected(7);
        let s = CrcFailure::new(MacFields::new(buf, 8));
        assert_eq!(s.opcode(), MacOpcode::CrcFailure);
        assert_eq!(s.length(), 3);
        assert!(s.identifiers().is_empty());
        assert!(s.channels().is_empty());
        assert_eq!(s.service_options(), None);
        assert_eq!(format!("{}", s), "CRC FAILURE CORRECTED:7");
    }

    #[test]
    fn test_null() {
        let s = NullInformation::new(MacFields::new(BitBuffer::from_hex("0000000000").unwrap(), 16));
        assert_eq!(s.length(), 3);
        assert_eq!(s.opcode(), MacOpcode::NullInformation);

        let s = NullAvoidZeroBias::new(MacFields::from_hex("08045555").unwrap());
        assert_eq!(s.length(), 4);
        assert_eq!(format!("{}", s), "NULL AVOID ZERO BIAS LENGTH:4");
    }
}
