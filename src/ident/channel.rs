//! Channel descriptors and the frequency band parameters used to resolve them.

use std::fmt;

/// Uniquely identifies a channel within a site: a 4-bit frequency band identifier and
/// a 12-bit channel number.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Channel(u16);

impl Channel {
    /// Create a new `Channel` from the given 16 bits.
    pub fn new(bits: u16) -> Channel { Channel(bits) }

    /// Frequency band whose parameters to use.
    pub fn band(&self) -> u8 { (self.0 >> 12) as u8 }
    /// Channel number within the band.
    pub fn number(&self) -> u16 { self.0 & 0xFFF }
    /// Raw 16-bit channel word.
    pub fn bits(&self) -> u16 { self.0 }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.band(), self.number())
    }
}

/// Channel carried by a grant or broadcast.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum ChannelDescriptor {
    /// Single channel, where the uplink is derived from the downlink by the band's
    /// transmit offset.
    Implicit(Channel),
    /// Separate downlink (FNE transmit) and uplink (FNE receive) channels.
    Explicit {
        tx: Channel,
        rx: Channel,
    },
}

impl ChannelDescriptor {
    /// Channel the FNE transmits on.
    pub fn downlink_channel(&self) -> Channel {
        match *self {
            ChannelDescriptor::Implicit(ch) => ch,
            ChannelDescriptor::Explicit { tx, .. } => tx,
        }
    }

    /// Channel subscribers transmit on.
    pub fn uplink_channel(&self) -> Channel {
        match *self {
            ChannelDescriptor::Implicit(ch) => ch,
            ChannelDescriptor::Explicit { rx, .. } => rx,
        }
    }

    /// Downlink frequency in Hz, if the relevant band has been announced.
    pub fn downlink(&self, bands: &FrequencyBandMap) -> Option<u64> {
        let ch = self.downlink_channel();
        bands[ch.band() as usize].map(|b| b.downlink(ch.number()))
    }

    /// Uplink frequency in Hz, if the relevant band has been announced.
    pub fn uplink(&self, bands: &FrequencyBandMap) -> Option<u64> {
        match *self {
            ChannelDescriptor::Implicit(ch) =>
                bands[ch.band() as usize].map(|b| b.uplink(ch.number())),
            ChannelDescriptor::Explicit { rx, .. } =>
                bands[rx.band() as usize].map(|b| b.downlink(rx.number())),
        }
    }
}

impl fmt::Display for ChannelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChannelDescriptor::Implicit(ch) => write!(f, "{}", ch),
            ChannelDescriptor::Explicit { tx, rx } => write!(f, "{}/{}", tx, rx),
        }
    }
}

/// Map frequency band identifier (maximum 16 per site) to its parameters.
pub type FrequencyBandMap = [Option<FrequencyBand>; 16];

/// Bandwidth and timeslot count of a TDMA-capable frequency band.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct ChannelType(u8);

impl ChannelType {
    /// Create a new `ChannelType` from the given 4 bits.
    pub fn new(bits: u8) -> ChannelType { ChannelType(bits & 0xF) }

    /// Raw channel type.
    pub fn bits(&self) -> u8 { self.0 }

    /// Channel bandwidth in Hz.
    pub fn bandwidth(&self) -> u32 {
        match self.0 {
            2 => 6_250,
            4 => 25_000,
            _ => 12_500,
        }
    }

    /// Number of timeslots carried on each physical channel.
    pub fn slots(&self) -> u16 {
        match self.0 {
            3 | 5 => 2,
            4 => 4,
            _ => 1,
        }
    }
}

/// Computes downlink/uplink frequencies and bandwidth for channel numbers within a band.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct FrequencyBand {
    /// Base frequency in Hz.
    base: u64,
    /// Channel spacing in Hz.
    spacing: u32,
    /// Uplink frequency offset in Hz.
    offset: i64,
    /// Channel bandwidth in Hz.
    pub bandwidth: u32,
    /// Timeslots per physical channel.
    slots: u16,
}

impl FrequencyBand {
    /// Create a new FDMA `FrequencyBand` from the given base frequency (5Hz steps),
    /// bandwidth (125Hz steps), 9-bit uplink offset (250kHz steps), and inter-channel
    /// spacing (125Hz steps.)
    pub fn new(base: u32, bandwidth: u16, offset: u16, spacing: u16) -> FrequencyBand {
        FrequencyBand {
            base: base as u64 * 5,
            spacing: spacing as u32 * 125,
            offset: signed_offset(offset, 8),
            bandwidth: bandwidth as u32 * 125,
            slots: 1,
        }
    }

    /// Create a new TDMA `FrequencyBand` from the given base frequency (5Hz steps),
    /// channel type, 14-bit uplink offset (250kHz steps), and spacing (125Hz steps.)
    pub fn tdma(base: u32, kind: ChannelType, offset: u16, spacing: u16) -> FrequencyBand {
        FrequencyBand {
            base: base as u64 * 5,
            spacing: spacing as u32 * 125,
            offset: signed_offset(offset, 13),
            bandwidth: kind.bandwidth(),
            slots: kind.slots(),
        }
    }

    /// Create a new VHF/UHF `FrequencyBand` from the given base frequency (5Hz steps),
    /// 4-bit bandwidth code, 14-bit uplink offset (250kHz steps), and spacing (125Hz
    /// steps.)
    pub fn vhf_uhf(base: u32, bandwidth: u8, offset: u16, spacing: u16) -> FrequencyBand {
        FrequencyBand {
            base: base as u64 * 5,
            spacing: spacing as u32 * 125,
            offset: signed_offset(offset, 13),
            bandwidth: match bandwidth {
                0b0100 => 6_250,
                0b0101 => 12_500,
                _ => 0,
            },
            slots: 1,
        }
    }

    /// Downlink frequency for the given channel number in Hz.
    pub fn downlink(&self, ch: u16) -> u64 {
        self.base + self.spacing as u64 * (ch / self.slots) as u64
    }

    /// Uplink frequency for the given channel number in Hz.
    pub fn uplink(&self, ch: u16) -> u64 {
        (self.downlink(ch) as i64 + self.offset) as u64
    }

    /// Timeslots carried on each physical channel.
    pub fn slots(&self) -> u16 { self.slots }
    /// Frequency of channel 0 in Hz.
    pub fn base(&self) -> u64 { self.base }
    /// Channel spacing in Hz.
    pub fn spacing(&self) -> u32 { self.spacing }
    /// Uplink offset from the downlink in Hz.
    pub fn offset(&self) -> i64 { self.offset }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BASE:{} SPACING:{} OFFSET:{} BANDWIDTH:{} SLOTS:{}", self.base,
            self.spacing, self.offset, self.bandwidth, self.slots)
    }
}

/// Decode an offset whose bit `sign` is set for a positive offset and whose lower bits
/// count 250kHz steps.
fn signed_offset(offset: u16, sign: u32) -> i64 {
    let off = (offset as i64 & ((1 << sign) - 1)) * 250_000;

    if offset >> sign & 1 == 0 { -off } else { off }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_channel() {
        let c = Channel::new(0b1000_100001110111);
        assert_eq!(c.band(), 0b1000);
        assert_eq!(c.number(), 0b100001110111);
        assert_eq!(format!("{}", Channel::new(0x2064)), "2-100");
    }

    #[test]
    fn test_frequency_band() {
        // Example from the standard.
        let p = FrequencyBand::new(170201250, 0x64, 0b010110100, 0x32);
        assert_eq!(p.base, 851_006_250);
        assert_eq!(p.spacing, 6_250);
        assert_eq!(p.offset, -45_000_000);
        assert_eq!(p.bandwidth, 12_500);
        assert_eq!(p.downlink(0b1001), 851_062_500);
        assert_eq!(p.uplink(0b1001), 806_062_500);
    }

    #[test]
    fn test_tdma_band() {
        let p = FrequencyBand::tdma(170201250, ChannelType::new(3), 0b10_0000_1011_0100, 100);
        assert_eq!(p.offset, 45_000_000);
        assert_eq!(p.bandwidth, 12_500);
        assert_eq!(p.slots(), 2);
        assert_eq!(p.downlink(0), 851_006_250);
        assert_eq!(p.downlink(1), 851_006_250);
        assert_eq!(p.downlink(2), 851_018_750);
        assert_eq!(p.uplink(2), 896_018_750);
    }

    #[test]
    fn test_vhf_uhf_band() {
        let p = FrequencyBand::vhf_uhf(30_000_000, 0b0100, 0, 50);
        assert_eq!(p.bandwidth, 6_250);
        assert_eq!(p.offset, 0);
        assert_eq!(p.downlink(4), 150_025_000);
    }

    #[test]
    fn test_descriptor() {
        let mut bands: FrequencyBandMap = [None; 16];
        bands[1] = Some(FrequencyBand::new(170201250, 0x64, 0b010110100, 0x32));

        let imp = ChannelDescriptor::Implicit(Channel::new(0x1009));
        assert_eq!(imp.downlink(&bands), Some(851_062_500));
        assert_eq!(imp.uplink(&bands), Some(806_062_500));

        let exp = ChannelDescriptor::Explicit {
            tx: Channel::new(0x1009),
            rx: Channel::new(0x2009),
        };
        assert_eq!(exp.downlink(&bands), Some(851_062_500));
        assert_eq!(exp.uplink(&bands), None);
        assert_eq!(exp.uplink_channel(), Channel::new(0x2009));
        assert_eq!(format!("{}", exp), "1-9/2-9");
    }
}
