//! Radio unit and talkgroup addressing.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies which group a call belongs to.
///
/// Users set their radios to receive one or more talkgroups, and the radio only
/// unsquelches if one of those talkgroups is seen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum Talkgroup {
    /// Includes nobody.
    Nobody,
    /// Default talkgroup when no other is selected.
    Default,
    /// Includes everybody.
    Everyone,
    /// Specific group of users.
    Other(u16),
}

impl Talkgroup {
    /// Parse a talkgroup from the given 16 bits.
    pub fn from_bits(bits: u16) -> Talkgroup {
        use self::Talkgroup::*;

        match bits {
            0x0000 => Nobody,
            0x0001 => Default,
            0xFFFF => Everyone,
            _ => Other(bits),
        }
    }

    /// Raw 16-bit address of the talkgroup.
    pub fn bits(&self) -> u16 {
        use self::Talkgroup::*;

        match *self {
            Nobody => 0x0000,
            Default => 0x0001,
            Everyone => 0xFFFF,
            Other(bits) => bits,
        }
    }
}

impl fmt::Display for Talkgroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Talkgroup::Everyone => write!(f, "ALL"),
            tg => write!(f, "{}", tg.bits()),
        }
    }
}

/// Identity of a unit or group qualified by its home network.
///
/// Carries the local address used on the current system along with the home WACN,
/// system, and ID (SUID or SGID.) Structures that don't transmit a distinct local
/// address use the home ID for both.
///
/// Two identities are equal when their home WACN, system, and ID match, regardless of
/// the local address they were seen with.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct FullyQualified {
    local: u32,
    wacn: u32,
    system: u16,
    id: u32,
}

impl FullyQualified {
    /// Create a new identity from a local address and home WACN, system, and ID.
    pub fn new(local: u32, wacn: u32, system: u16, id: u32) -> FullyQualified {
        FullyQualified {
            local: local,
            wacn: wacn,
            system: system,
            id: id,
        }
    }

    /// Create a new identity where the home ID also serves as the local address.
    pub fn aliased(id: u32, wacn: u32, system: u16) -> FullyQualified {
        Self::new(id, wacn, system, id)
    }

    /// Address used on the current system.
    pub fn local_address(&self) -> u32 { self.local }
    /// Home Wide Area Communication Network.
    pub fn wacn(&self) -> u32 { self.wacn }
    /// Home system within the WACN.
    pub fn system(&self) -> u16 { self.system }
    /// ID within the home system.
    pub fn id(&self) -> u32 { self.id }

    /// Whether the identity is qualified by a network. A WACN of zero denotes the home
    /// network.
    pub fn is_qualified(&self) -> bool { self.wacn != 0 }
}

impl PartialEq for FullyQualified {
    fn eq(&self, other: &Self) -> bool {
        self.wacn == other.wacn && self.system == other.system && self.id == other.id
    }
}

impl Eq for FullyQualified {}

impl Hash for FullyQualified {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wacn.hash(state);
        self.system.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for FullyQualified {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{:05X}.{:03X}.{}]", self.local, self.wacn, self.system, self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_talkgroup() {
        assert_eq!(Talkgroup::from_bits(0), Talkgroup::Nobody);
        assert_eq!(Talkgroup::from_bits(1), Talkgroup::Default);
        assert_eq!(Talkgroup::from_bits(0xFFFF), Talkgroup::Everyone);
        assert_eq!(Talkgroup::from_bits(0x1234), Talkgroup::Other(0x1234));

        for &bits in &[0, 1, 0x1234, 0xFFFF] {
            assert_eq!(Talkgroup::from_bits(bits).bits(), bits);
        }

        assert_eq!(format!("{}", Talkgroup::Everyone), "ALL");
        assert_eq!(format!("{}", Talkgroup::Other(100)), "100");
    }

    #[test]
    fn test_fully_qualified_eq() {
        let a = FullyQualified::new(0x123, 0xBEE00, 0x3A1, 0x4567);
        let b = FullyQualified::aliased(0x4567, 0xBEE00, 0x3A1);
        assert_eq!(a, b);
        assert_eq!(b.local_address(), 0x4567);
        assert!(a.is_qualified());

        assert!(a != FullyQualified::new(0x123, 0xBEE01, 0x3A1, 0x4567));
        assert!(a != FullyQualified::new(0x123, 0xBEE00, 0x3A2, 0x4567));
        assert!(a != FullyQualified::new(0x123, 0xBEE00, 0x3A1, 0x4568));
        assert!(!FullyQualified::aliased(1, 0, 0).is_qualified());
    }

    #[test]
    fn test_display() {
        let a = FullyQualified::new(100, 0xBEE00, 0x3A1, 200);
        assert_eq!(format!("{}", a), "100 [BEE00.3A1.200]");
    }
}
