//! Flag sets describing call and system services.

use std::fmt;

/// Options requested or granted for a voice call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct ServiceOptions(u8);

impl ServiceOptions {
    pub fn new(opts: u8) -> ServiceOptions { ServiceOptions(opts) }

    pub fn emergency(&self) -> bool { self.0 >> 7 == 1 }
    pub fn encrypted(&self) -> bool { self.0 >> 6 & 1 == 1 }
    pub fn full_duplex(&self) -> bool { self.0 >> 5 & 1 == 1 }
    pub fn packet_switched(&self) -> bool { self.0 >> 4 & 1 == 1 }
    pub fn prio(&self) -> u8 { self.0 & 0x7 }
    pub fn bits(&self) -> u8 { self.0 }
}

impl fmt::Display for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.emergency() {
            write!(f, "EMERGENCY ")?;
        }

        if self.encrypted() {
            write!(f, "ENCRYPTED ")?;
        }

        write!(f, "{} {} PRI{}",
            if self.full_duplex() { "FULL-DUPLEX" } else { "HALF-DUPLEX" },
            if self.packet_switched() { "PACKET" } else { "CIRCUIT" },
            self.prio())
    }
}

/// Options requested or granted for an SNDCP data service, which replace the priority
/// with a network service access point identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct DataServiceOptions(u8);

impl DataServiceOptions {
    pub fn new(opts: u8) -> DataServiceOptions { DataServiceOptions(opts) }

    pub fn emergency(&self) -> bool { self.0 >> 7 == 1 }
    pub fn encrypted(&self) -> bool { self.0 >> 6 & 1 == 1 }
    pub fn full_duplex(&self) -> bool { self.0 >> 5 & 1 == 1 }
    pub fn packet_switched(&self) -> bool { self.0 >> 4 & 1 == 1 }
    /// Network service access point identifier of the data context.
    pub fn nsapi(&self) -> u8 { self.0 & 0xF }

    /// Common call flags shared with voice service options.
    pub fn service_options(&self) -> ServiceOptions { ServiceOptions::new(self.0 & 0xF0) }
}

impl fmt::Display for DataServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} NSAPI:{}", self.service_options(), self.nsapi())
    }
}

/// Services supported by a site, as advertised in status broadcasts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct SystemServiceClass(u8);

impl SystemServiceClass {
    pub fn new(ssc: u8) -> Self { SystemServiceClass(ssc) }

    pub fn is_composite(&self) -> bool { self.0 & 0x01 != 0 }
    pub fn updates_only(&self) -> bool { self.0 & 0x02 != 0 }
    pub fn is_backup(&self) -> bool { self.0 & 0x04 != 0 }
    pub fn has_data(&self) -> bool { self.0 & 0x10 != 0 }
    pub fn has_voice(&self) -> bool { self.0 & 0x20 != 0 }
    pub fn has_registration(&self) -> bool { self.0 & 0x40 != 0 }
    pub fn has_auth(&self) -> bool { self.0 & 0x80 != 0 }
}

impl fmt::Display for SystemServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const NAMES: [(u8, &'static str); 7] = [
            (0x01, "COMPOSITE"),
            (0x02, "UPDATES"),
            (0x04, "BACKUP"),
            (0x10, "DATA"),
            (0x20, "VOICE"),
            (0x40, "REGISTRATION"),
            (0x80, "AUTHENTICATION"),
        ];

        let names = NAMES.iter()
            .filter(|&&(mask, _)| self.0 & mask != 0)
            .map(|&(_, name)| name)
            .collect::<Vec<_>>();

        write!(f, "[{}]", names.join(" "))
    }
}

/// Individual services listed in a system service broadcast.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub enum SystemService {
    GroupVoice,
    IndividualVoice,
    PstnToUnitVoice,
    UnitToPstnVoice,
    GroupData,
    IndividualData,
    UnitRegistration,
    GroupAffiliation,
    GroupAffiliationQuery,
    Authentication,
    Encryption,
    UserStatus,
    UserMessage,
    UnitStatus,
    UnitCheck,
    UnitDisable,
    CallAlert,
    RadioUnitMonitor,
    EmergencyAlarm,
    LocationRegistration,
}

/// Services in MSB-first bit order of the 24-bit service field.
static SERVICE_BITS: [Option<SystemService>; 24] = [
    Some(SystemService::GroupVoice),
    Some(SystemService::IndividualVoice),
    Some(SystemService::PstnToUnitVoice),
    Some(SystemService::UnitToPstnVoice),
    None,
    Some(SystemService::GroupData),
    Some(SystemService::IndividualData),
    None,
    Some(SystemService::UnitRegistration),
    Some(SystemService::GroupAffiliation),
    Some(SystemService::GroupAffiliationQuery),
    Some(SystemService::Authentication),
    Some(SystemService::Encryption),
    Some(SystemService::UserStatus),
    Some(SystemService::UserMessage),
    Some(SystemService::UnitStatus),
    Some(SystemService::UnitCheck),
    Some(SystemService::UnitDisable),
    Some(SystemService::CallAlert),
    Some(SystemService::RadioUnitMonitor),
    Some(SystemService::EmergencyAlarm),
    Some(SystemService::LocationRegistration),
    None,
    None,
];

/// Set of services from a 24-bit service field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct SystemServices(u32);

impl SystemServices {
    /// Create a new `SystemServices` from the given 24 bits.
    pub fn new(bits: u32) -> SystemServices { SystemServices(bits & 0xFFFFFF) }

    /// Whether the given service is in the set.
    pub fn contains(&self, svc: SystemService) -> bool {
        self.iter().any(|s| s == svc)
    }

    /// Iterate over the services in the set.
    pub fn iter(&self) -> impl Iterator<Item = SystemService> {
        let bits = self.0;

        SERVICE_BITS.iter().enumerate()
            .filter(move |&(i, _)| bits >> (23 - i) & 1 == 1)
            .filter_map(|(_, svc)| *svc)
    }

    pub fn bits(&self) -> u32 { self.0 }
}

impl fmt::Display for SystemServices {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self.iter().map(|svc| format!("{:?}", svc)).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(" "))
    }
}

/// Wraps a field whose meaning hasn't been confirmed against published documentation.
///
/// The raw value is extracted faithfully, but callers shouldn't rely on the suggested
/// interpretation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Unconfirmed<T>(pub T);

impl<T: Copy> Unconfirmed<T> {
    /// Get the value under its suggested interpretation.
    pub fn get(&self) -> T { self.0 }
}

impl<T: fmt::Display> fmt::Display for Unconfirmed<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(?)", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_service_options() {
        let opts = ServiceOptions::new(0b10110101);
        assert_eq!(opts.emergency(), true);
        assert_eq!(opts.encrypted(), false);
        assert_eq!(opts.full_duplex(), true);
        assert_eq!(opts.packet_switched(), true);
        assert_eq!(opts.prio(), 5);
        assert_eq!(format!("{}", opts), "EMERGENCY FULL-DUPLEX PACKET PRI5");
    }

    #[test]
    fn test_data_service_options() {
        let opts = DataServiceOptions::new(0b01010011);
        assert!(!opts.emergency());
        assert!(opts.encrypted());
        assert!(opts.packet_switched());
        assert_eq!(opts.nsapi(), 3);
        assert_eq!(opts.service_options().prio(), 0);
    }

    #[test]
    fn test_system_service_class() {
        let s = SystemServiceClass::new(0b01010001);
        assert!(s.is_composite());
        assert!(!s.updates_only());
        assert!(!s.is_backup());
        assert!(s.has_data());
        assert!(!s.has_voice());
        assert!(s.has_registration());
        assert!(!s.has_auth());
        assert_eq!(format!("{}", s), "[COMPOSITE DATA REGISTRATION]");
    }

    #[test]
    fn test_system_services() {
        let s = SystemServices::new(0b1100_0100_1000_0000_0000_0100);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![
            SystemService::GroupVoice,
            SystemService::IndividualVoice,
            SystemService::GroupData,
            SystemService::UnitRegistration,
            SystemService::LocationRegistration,
        ]);
        assert!(s.contains(SystemService::GroupData));
        assert!(!s.contains(SystemService::CallAlert));
    }

    #[test]
    fn test_unconfirmed() {
        let u = Unconfirmed(true);
        assert!(u.get());
        assert_eq!(format!("{}", u), "true(?)");
    }
}
