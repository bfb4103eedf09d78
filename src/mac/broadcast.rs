//! Control channel broadcasts describing the network, its sites, their services, and
//! the frequency bands channels are drawn from.

use std::fmt;

use consts::*;
use field::Field;
use ident::{
    ChannelDescriptor,
    FrequencyBand,
    Identifier,
    Role,
    SystemServiceClass,
    SystemServices,
    Value,
};
use ident::site::SiteFlags;
use mac::fields::{ExplicitChannelFields, FrequencyBandFields, MacFields};
use mac::structure::MacStructure;

/// Calendar date and time of day announced by the network.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Milliseconds into the minute.
    pub millisecond: u32,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}", self.year, self.month,
            self.day, self.hour, self.minute, self.millisecond / 1000,
            self.millisecond % 1000)
    }
}

/// Decode a signed local time offset, where the leading bit marks a negative offset and
/// the remaining bits count `unit` minutes.
fn local_offset(bits: u32, width: usize, unit: i32) -> i32 {
    let magnitude = (bits & ((1 << (width - 1)) - 1)) as i32 * unit;

    if bits >> (width - 1) & 1 == 1 { -magnitude } else { magnitude }
}

structure! {
    /// Aligns radios to the network's timeslot and superframe timing, and carries the
    /// system time.
    pub struct SynchronizationBroadcast;
}

impl SynchronizationBroadcast {
    const MINUTE_CORRECTION: Field = Field::range(23, 24);
    const LOCAL_OFFSET: Field = Field::range(26, 31);
    const YEAR: Field = Field::range(32, 38);
    const MONTH: Field = Field::range(39, 42);
    const DAY: Field = Field::range(43, 47);
    const HOUR: Field = Field::range(48, 52);
    const MINUTE: Field = Field::range(53, 58);
    const MICROSLOTS: Field = Field::range(59, 71);

    /// Whether the site's timing isn't locked to an external reference.
    pub fn unsynchronized(&self) -> bool { self.0.flag(20) }
    /// Whether the system time fields are valid.
    pub fn system_time_valid(&self) -> bool { !self.0.flag(21) }
    /// Whether the microslot count is locked to minute boundaries.
    pub fn microslot_minute_locked(&self) -> bool { !self.0.flag(22) }
    /// Correction applied to the minute rollover, in microslots.
    pub fn minute_correction(&self) -> u8 { self.0.bits(&Self::MINUTE_CORRECTION) }

    /// Offset of local time from UTC in minutes, if announced.
    pub fn local_offset(&self) -> Option<i32> {
        if self.0.flag(25) {
            Some(local_offset(self.0.int(&Self::LOCAL_OFFSET), 6, 30))
        } else {
            None
        }
    }

    /// Microslots (7.5ms) elapsed in the current minute.
    pub fn microslots(&self) -> u16 { self.0.bits(&Self::MICROSLOTS) }

    /// System time in UTC, if valid.
    pub fn time(&self) -> Option<Timestamp> {
        if !self.system_time_valid() {
            return None;
        }

        Some(Timestamp {
            year: 2000 + self.0.bits::<u16>(&Self::YEAR),
            month: self.0.bits(&Self::MONTH),
            day: self.0.bits(&Self::DAY),
            hour: self.0.bits(&Self::HOUR),
            minute: self.0.bits(&Self::MINUTE),
            millisecond: self.microslots() as u32 * 15 / 2,
        })
    }
}

impl MacStructure for SynchronizationBroadcast {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for SynchronizationBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SYNCHRONIZATION BROADCAST")?;

        match self.time() {
            Some(time) => write!(f, " TIME:{}", time)?,
            None => write!(f, " TIME:INVALID")?,
        }

        if let Some(offset) = self.local_offset() {
            write!(f, " OFFSET:{}MIN", offset)?;
        }

        if self.unsynchronized() {
            write!(f, " UNSYNCHRONIZED")?;
        }

        Ok(())
    }
}

/// Define a frequency band update decoded with the given band field layout.
macro_rules! frequency_band_update {
    ($(#[$meta:meta])* pub struct $name:ident = $label:expr, $layout:expr;) => {
        structure! {
            $(#[$meta])*
            pub struct $name;
        }

        impl $name {
            const BAND: FrequencyBandFields = $layout;

            /// Band identifier the parameters apply to.
            pub fn id(&self) -> u8 { Self::BAND.id(&self.0) }
            pub fn band(&self) -> FrequencyBand { Self::BAND.band(&self.0) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} ID:{} {}", $label, self.id(), self.band())
            }
        }
    };
}

frequency_band_update! {
    /// Parameters of a TDMA frequency band.
    pub struct FrequencyBandUpdateTdma = "FREQUENCY BAND UPDATE TDMA",
        FrequencyBandFields::Tdma {
            id: Field::range(8, 11),
            kind: Field::range(12, 15),
            offset: Field::range(16, 29),
            spacing: Field::range(30, 39),
            base: Field::range(40, 71),
        };
}

impl MacStructure for FrequencyBandUpdateTdma {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

frequency_band_update! {
    /// Parameters of a VHF or UHF frequency band.
    pub struct FrequencyBandUpdateVhfUhf = "FREQUENCY BAND UPDATE VHF/UHF",
        FrequencyBandFields::VhfUhf {
            id: Field::range(8, 11),
            bandwidth: Field::range(12, 15),
            offset: Field::range(16, 29),
            spacing: Field::range(30, 39),
            base: Field::range(40, 71),
        };
}

impl MacStructure for FrequencyBandUpdateVhfUhf {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

frequency_band_update! {
    /// Parameters of an FDMA frequency band.
    pub struct FrequencyBandUpdate = "FREQUENCY BAND UPDATE",
        FrequencyBandFields::Fdma {
            id: Field::range(8, 11),
            bandwidth: Field::range(12, 20),
            offset: Field::range(21, 29),
            spacing: Field::range(30, 39),
            base: Field::range(40, 71),
        };
}

impl MacStructure for FrequencyBandUpdate {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

frequency_band_update! {
    /// Parameters of a TDMA frequency band belonging to another network.
    pub struct FrequencyBandUpdateTdmaExtended = "FREQUENCY BAND UPDATE TDMA EXTENDED",
        FrequencyBandFields::Tdma {
            id: Field::range(8, 11),
            kind: Field::range(12, 15),
            offset: Field::range(16, 29),
            spacing: Field::range(30, 39),
            base: Field::range(40, 71),
        };
}

impl FrequencyBandUpdateTdmaExtended {
    const WACN: Field = Field::span(OCTET_10_BIT_72, 20);
    const SYSTEM: Field = Field::span(OCTET_10_BIT_72 + 20, 12);

    pub fn wacn(&self) -> u32 { self.0.int(&Self::WACN) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
}

impl MacStructure for FrequencyBandUpdateTdmaExtended {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::new(Role::Any, Value::Wacn(self.wacn())),
            Identifier::new(Role::Any, Value::System(self.system())),
        ]
    }
}

structure! {
    /// Current date and time, with the local offset from UTC.
    pub struct TimeAndDateAnnouncement;
}

impl TimeAndDateAnnouncement {
    const LOCAL_OFFSET: Field = Field::range(11, 23);
    const MONTH: Field = Field::range(24, 27);
    const DAY: Field = Field::range(28, 32);
    const YEAR: Field = Field::range(33, 45);
    const HOUR: Field = Field::range(48, 52);
    const MINUTE: Field = Field::range(53, 58);
    const SECOND: Field = Field::range(59, 64);

    pub fn date_valid(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    pub fn time_valid(&self) -> bool { self.0.flag(OCTET_2_BIT_8 + 1) }

    /// Offset of local time from UTC in minutes, if announced.
    pub fn local_offset(&self) -> Option<i32> {
        if self.0.flag(OCTET_2_BIT_8 + 2) {
            Some(local_offset(self.0.int(&Self::LOCAL_OFFSET), 13, 1))
        } else {
            None
        }
    }

    /// Announced date and time in UTC, if both are valid.
    pub fn time(&self) -> Option<Timestamp> {
        if !self.date_valid() || !self.time_valid() {
            return None;
        }

        Some(Timestamp {
            year: self.0.bits(&Self::YEAR),
            month: self.0.bits(&Self::MONTH),
            day: self.0.bits(&Self::DAY),
            hour: self.0.bits(&Self::HOUR),
            minute: self.0.bits(&Self::MINUTE),
            millisecond: self.0.int(&Self::SECOND) * 1000,
        })
    }
}

impl MacStructure for TimeAndDateAnnouncement {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for TimeAndDateAnnouncement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TIME AND DATE ANNOUNCEMENT")?;

        match self.time() {
            Some(time) => write!(f, " TIME:{}", time)?,
            None => write!(f, " TIME:INVALID")?,
        }

        match self.local_offset() {
            Some(offset) => write!(f, " OFFSET:{}MIN", offset),
            None => Ok(()),
        }
    }
}

structure! {
    /// Services the site offers and supports.
    pub struct SystemServiceBroadcast;
}

impl SystemServiceBroadcast {
    const TWUID_VALIDITY: Field = Field::span(OCTET_2_BIT_8, 8);
    const AVAILABLE: Field = Field::span(OCTET_3_BIT_16, 24);
    const SUPPORTED: Field = Field::span(OCTET_6_BIT_40, 24);
    const PRIORITY: Field = Field::span(OCTET_9_BIT_64, 8);

    /// Period for which working unit IDs remain valid.
    pub fn twuid_validity(&self) -> u8 { self.0.bits(&Self::TWUID_VALIDITY) }
    pub fn available(&self) -> SystemServices { SystemServices::new(self.0.int(&Self::AVAILABLE)) }
    pub fn supported(&self) -> SystemServices { SystemServices::new(self.0.int(&Self::SUPPORTED)) }
    /// Minimum priority level of requests currently accepted.
    pub fn request_priority(&self) -> u8 { self.0.bits(&Self::PRIORITY) }
}

impl MacStructure for SystemServiceBroadcast {
    fn fields(&self) -> &MacFields { &self.0 }
    fn identifiers(&self) -> Vec<Identifier> { vec![] }
}

impl fmt::Display for SystemServiceBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SYSTEM SERVICE BROADCAST AVAILABLE:{} SUPPORTED:{} PRIORITY:{}",
            self.available(), self.supported(), self.request_priority())
    }
}

/// Channel advertised by a site broadcast, with the services offered on it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SiteChannel {
    pub channel: ChannelDescriptor,
    pub services: SystemServiceClass,
}

impl fmt::Display for SiteChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CHAN:{} SERVICES:{}", self.channel, self.services)
    }
}

/// Identifiers locating a site: system, RFSS, and site, each present when broadcast.
fn site_identifiers(wacn: Option<u32>, system: Option<u16>, rfss: Option<u8>,
                    site: Option<u8>, lra: Option<u8>)
    -> Vec<Identifier>
{
    let values = [
        wacn.map(Value::Wacn),
        system.map(Value::System),
        rfss.map(Value::Rfss),
        site.map(Value::Site),
        lra.map(Value::Lra),
    ];

    values.iter().cloned()
        .filter_map(|v| v.map(|v| Identifier::new(Role::Any, v)))
        .collect()
}

structure! {
    /// Secondary control channels of the current site, on implicit channels.
    pub struct SecondaryControlChannelBroadcastImplicit;
}

impl SecondaryControlChannelBroadcastImplicit {
    const RFSS: Field = Field::span(OCTET_2_BIT_8, 8);
    const SITE: Field = Field::span(OCTET_3_BIT_16, 8);
    const CHANNELS: [(Field, Field); 2] = [
        (Field::span(OCTET_4_BIT_24, 16), Field::span(OCTET_6_BIT_40, 8)),
        (Field::span(OCTET_7_BIT_48, 16), Field::span(OCTET_9_BIT_64, 8)),
    ];

    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channels(&self) -> Vec<SiteChannel> {
        Self::CHANNELS.iter().map(|&(ref ch, ref ssc)| SiteChannel {
            channel: ChannelDescriptor::Implicit(self.0.channel(ch)),
            services: SystemServiceClass::new(self.0.bits(ssc)),
        }).collect()
    }
}

impl MacStructure for SecondaryControlChannelBroadcastImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, None, Some(self.rfss()), Some(self.site()), None);
        ids.extend(self.channels().into_iter().map(Identifier::channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> {
        self.site_channels().iter().map(|c| c.channel).collect()
    }
}

impl fmt::Display for SecondaryControlChannelBroadcastImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SECONDARY CONTROL CHANNEL BROADCAST RFSS:{} SITE:{}", self.rfss(),
            self.site())?;

        for ch in self.site_channels() {
            write!(f, " {}", ch)?;
        }

        Ok(())
    }
}

structure! {
    /// Status of the current site and its RF subsystem, on an implicit channel.
    pub struct RfssStatusBroadcastImplicit;
}

impl RfssStatusBroadcastImplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const SYSTEM: Field = Field::range(20, 31);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const CHANNEL: Field = Field::span(OCTET_7_BIT_48, 16);
    const SERVICES: Field = Field::span(OCTET_9_BIT_64, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    /// Whether roaming radios must reregister when entering the site.
    pub fn roaming_reregistration(&self) -> bool { self.0.flag(18) }
    /// Whether the site has an active connection to the RFSS controller.
    pub fn active_network(&self) -> bool { self.0.flag(19) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL)),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for RfssStatusBroadcastImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, Some(self.system()), Some(self.rfss()),
                                       Some(self.site()), Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for RfssStatusBroadcastImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RFSS STATUS BROADCAST SYSTEM:{:03X} RFSS:{} SITE:{} LRA:{} {}{}",
            self.system(), self.rfss(), self.site(), self.lra(), self.site_channel(),
            if self.active_network() { " NETWORKED" } else { "" })
    }
}

structure! {
    /// Identity of the network the current site belongs to, on an implicit channel.
    pub struct NetworkStatusBroadcastImplicit;
}

impl NetworkStatusBroadcastImplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const WACN: Field = Field::span(OCTET_3_BIT_16, 20);
    const SYSTEM: Field = Field::span(OCTET_3_BIT_16 + 20, 12);
    const CHANNEL: Field = Field::span(OCTET_7_BIT_48, 16);
    const SERVICES: Field = Field::span(OCTET_9_BIT_64, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn wacn(&self) -> u32 { self.0.int(&Self::WACN) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL)),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for NetworkStatusBroadcastImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(Some(self.wacn()), Some(self.system()), None, None,
                                       Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for NetworkStatusBroadcastImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NETWORK STATUS BROADCAST WACN:{:05X} SYSTEM:{:03X} LRA:{} {}",
            self.wacn(), self.system(), self.lra(), self.site_channel())
    }
}

structure! {
    /// Status of a neighboring site, on an implicit channel.
    pub struct AdjacentStatusBroadcastImplicit;
}

impl AdjacentStatusBroadcastImplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const FLAGS: Field = Field::range(16, 19);
    const SYSTEM: Field = Field::range(20, 31);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const CHANNEL: Field = Field::span(OCTET_7_BIT_48, 16);
    const SERVICES: Field = Field::span(OCTET_9_BIT_64, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn flags(&self) -> SiteFlags { SiteFlags::new(self.0.bits(&Self::FLAGS)) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: ChannelDescriptor::Implicit(self.0.channel(&Self::CHANNEL)),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for AdjacentStatusBroadcastImplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, Some(self.system()), Some(self.rfss()),
                                       Some(self.site()), Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for AdjacentStatusBroadcastImplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ADJACENT STATUS BROADCAST SYSTEM:{:03X} RFSS:{} SITE:{} LRA:{} {} {}",
            self.system(), self.rfss(), self.site(), self.lra(), self.site_channel(),
            self.flags())
    }
}

structure! {
    /// Secondary control channel of the current site, on an explicit channel pair.
    pub struct SecondaryControlChannelBroadcastExplicit;
}

impl SecondaryControlChannelBroadcastExplicit {
    const RFSS: Field = Field::span(OCTET_2_BIT_8, 8);
    const SITE: Field = Field::span(OCTET_3_BIT_16, 8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_4_BIT_24);
    const SERVICES: Field = Field::span(OCTET_8_BIT_56, 8);

    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: Self::CHANNEL.channel(&self.0),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for SecondaryControlChannelBroadcastExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, None, Some(self.rfss()), Some(self.site()), None);
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for SecondaryControlChannelBroadcastExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SECONDARY CONTROL CHANNEL BROADCAST EXPLICIT RFSS:{} SITE:{} {}",
            self.rfss(), self.site(), self.site_channel())
    }
}

structure! {
    /// Status of the current site and its RF subsystem, on an explicit channel pair.
    pub struct RfssStatusBroadcastExplicit;
}

impl RfssStatusBroadcastExplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const SYSTEM: Field = Field::range(20, 31);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_7_BIT_48);
    const SERVICES: Field = Field::span(OCTET_11_BIT_80, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn roaming_reregistration(&self) -> bool { self.0.flag(18) }
    pub fn active_network(&self) -> bool { self.0.flag(19) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: Self::CHANNEL.channel(&self.0),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for RfssStatusBroadcastExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, Some(self.system()), Some(self.rfss()),
                                       Some(self.site()), Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for RfssStatusBroadcastExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RFSS STATUS BROADCAST EXPLICIT SYSTEM:{:03X} RFSS:{} SITE:{} LRA:{} {}{}",
            self.system(), self.rfss(), self.site(), self.lra(), self.site_channel(),
            if self.active_network() { " NETWORKED" } else { "" })
    }
}

structure! {
    /// Identity of the network the current site belongs to, on an explicit channel pair.
    pub struct NetworkStatusBroadcastExplicit;
}

impl NetworkStatusBroadcastExplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const WACN: Field = Field::span(OCTET_3_BIT_16, 20);
    const SYSTEM: Field = Field::span(OCTET_3_BIT_16 + 20, 12);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_7_BIT_48);
    const SERVICES: Field = Field::span(OCTET_11_BIT_80, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn wacn(&self) -> u32 { self.0.int(&Self::WACN) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: Self::CHANNEL.channel(&self.0),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for NetworkStatusBroadcastExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(Some(self.wacn()), Some(self.system()), None, None,
                                       Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for NetworkStatusBroadcastExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NETWORK STATUS BROADCAST EXPLICIT WACN:{:05X} SYSTEM:{:03X} LRA:{} {}",
            self.wacn(), self.system(), self.lra(), self.site_channel())
    }
}

structure! {
    /// Status of a neighboring site, on an explicit channel pair.
    pub struct AdjacentStatusBroadcastExplicit;
}

impl AdjacentStatusBroadcastExplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const FLAGS: Field = Field::range(16, 19);
    const SYSTEM: Field = Field::range(20, 31);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_7_BIT_48);
    const SERVICES: Field = Field::span(OCTET_11_BIT_80, 8);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn flags(&self) -> SiteFlags { SiteFlags::new(self.0.bits(&Self::FLAGS)) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: Self::CHANNEL.channel(&self.0),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for AdjacentStatusBroadcastExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(None, Some(self.system()), Some(self.rfss()),
                                       Some(self.site()), Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for AdjacentStatusBroadcastExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ADJACENT STATUS BROADCAST EXPLICIT SYSTEM:{:03X} RFSS:{} SITE:{} LRA:{} \
                   {} {}", self.system(), self.rfss(), self.site(), self.lra(),
            self.site_channel(), self.flags())
    }
}

structure! {
    /// Status of a neighboring site in another network, on an explicit channel pair.
    pub struct AdjacentStatusBroadcastExtendedExplicit;
}

impl AdjacentStatusBroadcastExtendedExplicit {
    const LRA: Field = Field::span(OCTET_2_BIT_8, 8);
    const FLAGS: Field = Field::range(16, 19);
    const SYSTEM: Field = Field::range(20, 31);
    const RFSS: Field = Field::span(OCTET_5_BIT_32, 8);
    const SITE: Field = Field::span(OCTET_6_BIT_40, 8);
    const CHANNEL: ExplicitChannelFields = ExplicitChannelFields::at(OCTET_7_BIT_48);
    const SERVICES: Field = Field::span(OCTET_11_BIT_80, 8);
    const WACN: Field = Field::span(OCTET_12_BIT_88, 20);

    pub fn lra(&self) -> u8 { self.0.bits(&Self::LRA) }
    pub fn flags(&self) -> SiteFlags { SiteFlags::new(self.0.bits(&Self::FLAGS)) }
    pub fn wacn(&self) -> u32 { self.0.int(&Self::WACN) }
    pub fn system(&self) -> u16 { self.0.bits(&Self::SYSTEM) }
    pub fn rfss(&self) -> u8 { self.0.bits(&Self::RFSS) }
    pub fn site(&self) -> u8 { self.0.bits(&Self::SITE) }

    pub fn site_channel(&self) -> SiteChannel {
        SiteChannel {
            channel: Self::CHANNEL.channel(&self.0),
            services: SystemServiceClass::new(self.0.bits(&Self::SERVICES)),
        }
    }
}

impl MacStructure for AdjacentStatusBroadcastExtendedExplicit {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        let mut ids = site_identifiers(Some(self.wacn()), Some(self.system()),
                                       Some(self.rfss()), Some(self.site()), Some(self.lra()));
        ids.push(Identifier::channel(self.site_channel().channel));
        ids
    }

    fn channels(&self) -> Vec<ChannelDescriptor> { vec![self.site_channel().channel] }
}

impl fmt::Display for AdjacentStatusBroadcastExtendedExplicit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ADJACENT STATUS BROADCAST EXTENDED WACN:{:05X} SYSTEM:{:03X} RFSS:{} \
                   SITE:{} LRA:{} {} {}", self.wacn(), self.system(), self.rfss(), self.site(),
            self.lra(), self.site_channel(), self.flags())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ident::{self, Channel, ChannelType, IdentifierKind, SystemService};
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_local_offset() {
        assert_eq!(local_offset(0b000011, 6, 30), 90);
        assert_eq!(local_offset(0b100011, 6, 30), -90);
        assert_eq!(local_offset(0x1000 | 300, 13, 1), -300);
    }

    #[test]
    fn test_frequency_band_update() {
        // Base 851.00625 MHz, 12.5kHz spacing, -45MHz offset, 2-slot channel type.
        let mut b = ::bits::BitBufferBuilder::new(9);
        b.set_int(&Field::span(0, 8), 0, 0x73)
         .set_int(&Field::range(8, 11), 0, 1)
         .set_int(&Field::range(12, 15), 0, 3)
         .set_int(&Field::range(16, 29), 0, 0b00_0000_1011_0100)
         .set_int(&Field::range(30, 39), 0, 100)
         .set_int(&Field::range(40, 71), 0, 170_201_250);
        let s = FrequencyBandUpdateTdma::new(MacFields::new(b.build(), 0));

        assert_eq!(s.length(), 9);
        assert_eq!(s.id(), 1);
        let band = s.band();
        assert_eq!(band.base(), 851_006_250);
        assert_eq!(band.offset(), -45_000_000);
        assert_eq!(band.slots(), ChannelType::new(3).slots());
        assert_eq!(band.downlink(2), 851_018_750);
    }

    #[test]
    fn test_network_status() {
        let s = NetworkStatusBroadcastExplicit::new(fields("FB 05 BEE003A1 1001 1101 70"));
        assert_eq!(s.length(), 11);
        assert_eq!(s.wacn(), 0xBEE00);
        assert_eq!(s.system(), 0x3A1);
        assert_eq!(s.lra(), 5);
        assert_eq!(s.site_channel(), SiteChannel {
            channel: ChannelDescriptor::Explicit {
                tx: Channel::new(0x1001),
                rx: Channel::new(0x1101),
            },
            services: SystemServiceClass::new(0x70),
        });

        let ids = s.identifiers();
        assert_eq!(ident::find(&ids, Role::Any, IdentifierKind::Wacn),
            Some(&Identifier::new(Role::Any, Value::Wacn(0xBEE00))));
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_adjacent_status() {
        let s = AdjacentStatusBroadcastImplicit::new(fields("7C 05 33A1 01 02 1001 70"));
        assert_eq!(s.flags(), SiteFlags::new(0b0011));
        assert_eq!(s.system(), 0x3A1);
        assert_eq!(s.rfss(), 1);
        assert_eq!(s.site(), 2);
        assert_eq!(s.channels(), vec![ChannelDescriptor::Implicit(Channel::new(0x1001))]);
        assert_eq!(s.identifiers().len(), 5);

        let s = AdjacentStatusBroadcastExtendedExplicit::new(
            fields("FE 05 33A1 01 02 1001 1101 70 BEE000"));
        assert_eq!(s.length(), 14);
        assert_eq!(s.wacn(), 0xBEE00);
        assert_eq!(s.identifiers().len(), 6);
    }

    #[test]
    fn test_rfss_status() {
        let s = RfssStatusBroadcastImplicit::new(fields("7A 05 13A1 01 02 1001 70"));
        assert!(s.active_network());
        assert!(!s.roaming_reregistration());
        assert_eq!(s.system(), 0x3A1);
    }

    #[test]
    fn test_secondary_control_channel() {
        let s = SecondaryControlChannelBroadcastImplicit::new(
            fields("79 01 02 1001 70 1002 30"));
        assert_eq!(s.channels().len(), 2);
        assert_eq!(s.site_channels()[1].services, SystemServiceClass::new(0x30));
    }

    #[test]
    fn test_system_services() {
        let s = SystemServiceBroadcast::new(fields("78 00 C00000 F00000 01"));
        assert!(s.available().contains(SystemService::GroupVoice));
        assert!(!s.available().contains(SystemService::PstnToUnitVoice));
        assert!(s.supported().contains(SystemService::UnitToPstnVoice));
        assert_eq!(format!("{}", s.available()), "[GroupVoice IndividualVoice]");
    }

    #[test]
    fn test_sync_broadcast() {
        let mut b = ::bits::BitBufferBuilder::new(9);
        b.set_int(&Field::span(0, 8), 0, 0x70)
         .set(25, true)
         .set_int(&Field::range(26, 31), 0, 0b100010)
         .set_int(&Field::range(32, 38), 0, 24)
         .set_int(&Field::range(39, 42), 0, 10)
         .set_int(&Field::range(43, 47), 0, 19)
         .set_int(&Field::range(48, 52), 0, 13)
         .set_int(&Field::range(53, 58), 0, 20)
         .set_int(&Field::range(59, 71), 0, 7600);
        let s = SynchronizationBroadcast::new(MacFields::new(b.build(), 0));

        assert!(s.system_time_valid());
        assert_eq!(s.local_offset(), Some(-60));
        assert_eq!(s.time(), Some(Timestamp {
            year: 2024,
            month: 10,
            day: 19,
            hour: 13,
            minute: 20,
            millisecond: 57_000,
        }));
        assert_eq!(format!("{}", s.time().unwrap()), "2024-10-19 13:20:57.000");
    }

    #[test]
    fn test_time_and_date() {
        let mut b = ::bits::BitBufferBuilder::new(9);
        b.set_int(&Field::span(0, 8), 0, 0x75)
         .set(8, true)
         .set(9, true)
         .set_int(&Field::range(24, 27), 0, 2)
         .set_int(&Field::range(28, 32), 0, 29)
         .set_int(&Field::range(33, 45), 0, 2024)
         .set_int(&Field::range(48, 52), 0, 23)
         .set_int(&Field::range(53, 58), 0, 59)
         .set_int(&Field::range(59, 64), 0, 30);
        let s = TimeAndDateAnnouncement::new(MacFields::new(b.build(), 0));

        assert_eq!(s.local_offset(), None);
        assert_eq!(format!("{}", s.time().unwrap()), "2024-02-29 23:59:30.000");
    }
}
