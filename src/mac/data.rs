//! Packet data (SNDCP) channel structures.

use std::fmt;

use consts::*;
use field::Field;
use ident::{ChannelDescriptor, DataServiceOptions, Identifier, Role, ServiceOptions};
use mac::fields::{DataServiceFields, ExplicitChannelFields, MacFields};
use mac::structure::MacStructure;

structure! {
    /// Grants a radio a packet data channel.
    pub struct SndcpDataChannelGrant;
}

impl SndcpDataChannelGrant {
    const SERVICE: DataServiceFields = DataServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_3_BIT_16);
    const TARGET: Field = Field::span(OCTET_7_BIT_48, 24);

    pub fn options(&self) -> DataServiceOptions { Self::SERVICE.data_options(&self.0) }
    pub fn channel(&self) -> ChannelDescriptor { Self::CHANNEL.channel(&self.0) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for SndcpDataChannelGrant {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::channel(self.channel()),
        ]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }

    fn service_options(&self) -> Option<ServiceOptions> {
        Some(self.options().service_options())
    }
}

impl fmt::Display for SndcpDataChannelGrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SNDCP DATA CHANNEL GRANT TO:{} CHAN:{} NSAPI:{}", self.target(),
            self.channel(), self.options().nsapi())
    }
}

structure! {
    /// Asks a radio to accept packet data waiting for it.
    pub struct SndcpDataPageRequest;
}

impl SndcpDataPageRequest {
    const SERVICE: DataServiceFields = DataServiceFields::at(OCTET_2_BIT_8);
    const ACCESS_CONTROL: Field = Field::span(OCTET_3_BIT_16, 16);
    const TARGET: Field = Field::span(OCTET_5_BIT_32, 24);

    pub fn options(&self) -> DataServiceOptions { Self::SERVICE.data_options(&self.0) }
    /// Data access control value, used to pick among competing data channels.
    pub fn access_control(&self) -> u16 { self.0.bits(&Self::ACCESS_CONTROL) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
}

impl MacStructure for SndcpDataPageRequest {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target())]
    }

    fn service_options(&self) -> Option<ServiceOptions> {
        Some(self.options().service_options())
    }
}

impl fmt::Display for SndcpDataPageRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SNDCP DATA PAGE REQUEST TO:{} DAC:{} NSAPI:{}", self.target(),
            self.access_control(), self.options().nsapi())
    }
}

structure! {
    /// Advertises the packet data channel and its access rules.
    pub struct SndcpDataChannelAnnouncementExplicit;
}

impl SndcpDataChannelAnnouncementExplicit {
    const SERVICE: DataServiceFields = DataServiceFields::at(OCTET_2_BIT_8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_4_BIT_24);
    const ACCESS_CONTROL: Field = Field::span(OCTET_8_BIT_56, 16);

    pub fn options(&self) -> DataServiceOptions { Self::SERVICE.data_options(&self.0) }
    /// Whether radios may access the channel autonomously.
    pub fn autonomous_access(&self) -> bool { self.0.flag(OCTET_3_BIT_16) }
    /// Whether radios must request access first.
    pub fn requested_access(&self) -> bool { self.0.flag(OCTET_3_BIT_16 + 1) }
    pub fn channel(&self) -> ChannelDescriptor { Self::CHANNEL.channel(&self.0) }
    pub fn access_control(&self) -> u16 { self.0.bits(&Self::ACCESS_CONTROL) }
}

impl MacStructure for SndcpDataChannelAnnouncementExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::channel(self.channel())]
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.channel()] }

    fn service_options(&self) -> Option<ServiceOptions> {
        Some(self.options().service_options())
    }
}

impl fmt::Display for SndcpDataChannelAnnouncementExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SNDCP DATA CHANNEL ANNOUNCEMENT CHAN:{} DAC:{}{}{}", self.channel(),
            self.access_control(),
            if self.autonomous_access() { " AUTONOMOUS" } else { "" },
            if self.requested_access() { " REQUESTED" } else { "" })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ident::Channel;
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_grant() {
        let s = SndcpDataChannelGrant::new(fields("54 13 1001 1101 000042"));
        assert_eq!(s.length(), 9);
        assert_eq!(s.options().nsapi(), 3);
        assert!(s.options().packet_switched());
        assert_eq!(s.service_options(), Some(ServiceOptions::new(0x10)));
        assert_eq!(s.channel().uplink_channel(), Channel::new(0x1101));
        assert_eq!(s.target(), 0x42);
    }

    #[test]
    fn test_announcement() {
        let s = SndcpDataChannelAnnouncementExplicit::new(
            fields("56 00 80 1001 1101 0007"));
        assert_eq!(s.length(), 9);
        assert!(s.autonomous_access());
        assert!(!s.requested_access());
        assert_eq!(s.access_control(), 7);
        assert_eq!(s.identifiers().len(), 1);
    }

    #[test]
    fn test_page_request() {
        let s = SndcpDataPageRequest::new(fields("55 01 0100 000042"));
        assert_eq!(s.length(), 7);
        assert_eq!(s.access_control(), 0x100);
        assert_eq!(s.target(), 0x42);
    }
}
