//! Site and network descriptors.

use std::fmt;

/// Status of an adjacent site.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct SiteFlags(u8);

impl SiteFlags {
    /// Create a new `SiteFlags` from the given 4-bit word.
    pub fn new(opts: u8) -> SiteFlags {
        debug_assert!(opts >> 4 == 0);
        SiteFlags(opts & 0xF)
    }

    /// Whether site is "conventional", with no trunking.
    pub fn conventional(&self) -> bool { self.0 & 0b1000 != 0 }
    /// Whether site is in a failure state.
    pub fn failing(&self) -> bool { self.0 & 0b100 != 0 }
    /// Whether this information is up-to-date (whether broadcasting site is in
    /// communication with adjacent site.)
    pub fn current(&self) -> bool { self.0 & 0b10 != 0 }
    /// Whether site has active network connection with RFSS controller and can
    /// communicate with other sites.
    pub fn networked(&self) -> bool { self.0 & 1 != 0 }
}

impl fmt::Display for SiteFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}{}",
            if self.conventional() { "CONVENTIONAL " } else { "" },
            if self.failing() { "FAILURE " } else { "" },
            if self.current() { "CURRENT" } else { "STALE" },
            if self.networked() { " NETWORKED" } else { "" })
    }
}

/// Registration status returned in a registration response.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum RegistrationResponse {
    Accept,
    Fail,
    Deny,
    Refused,
}

impl RegistrationResponse {
    /// Parse a response from the given 2 bits.
    pub fn from_bits(bits: u8) -> RegistrationResponse {
        use self::RegistrationResponse::*;

        match bits & 0b11 {
            0b00 => Accept,
            0b01 => Fail,
            0b10 => Deny,
            _ => Refused,
        }
    }
}

/// Group affiliation status returned in an affiliation response.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum AffiliationResponse {
    Accept,
    Fail,
    Deny,
    Refused,
}

impl AffiliationResponse {
    /// Parse a response from the given 2 bits.
    pub fn from_bits(bits: u8) -> AffiliationResponse {
        use self::AffiliationResponse::*;

        match bits & 0b11 {
            0b00 => Accept,
            0b01 => Fail,
            0b10 => Deny,
            _ => Refused,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_site_flags() {
        let s = SiteFlags::new(0b0011);
        assert!(!s.conventional());
        assert!(!s.failing());
        assert!(s.current());
        assert!(s.networked());
        assert_eq!(format!("{}", s), "CURRENT NETWORKED");
        assert_eq!(format!("{}", SiteFlags::new(0b1100)), "CONVENTIONAL FAILURE STALE");
    }

    #[test]
    fn test_responses() {
        assert_eq!(RegistrationResponse::from_bits(0), RegistrationResponse::Accept);
        assert_eq!(RegistrationResponse::from_bits(2), RegistrationResponse::Deny);
        assert_eq!(AffiliationResponse::from_bits(3), AffiliationResponse::Refused);
    }
}
