//! Link control structures exchanged on traffic channels.

use std::fmt;

use consts::*;
use field::Field;
use ident::{Identifier, Role, Value};
use mac::fields::MacFields;
use mac::structure::MacStructure;

structure! {
    /// Tells a radio to adjust its transmit power, reporting how its signal is received.
    pub struct PowerControlSignalQuality;
}

impl PowerControlSignalQuality {
    const TARGET: Field = Field::span(OCTET_2_BIT_8, 24);
    const RF_LEVEL: Field = Field::span(OCTET_5_BIT_32, 4);
    const BIT_ERROR_RATE: Field = Field::span(OCTET_5_BIT_32 + 4, 4);

    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    /// Received signal level, from 0 (weakest) to 15.
    pub fn rf_level(&self) -> u8 { self.0.bits(&Self::RF_LEVEL) }
    /// Estimated bit error rate class, from 0 (best) to 15.
    pub fn bit_error_rate(&self) -> u8 { self.0.bits(&Self::BIT_ERROR_RATE) }
}

impl MacStructure for PowerControlSignalQuality {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![Identifier::radio(Role::To, self.target())]
    }
}

impl fmt::Display for PowerControlSignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "POWER CONTROL SIGNAL QUALITY TO:{} RF LEVEL:{} BER:{}", self.target(),
            self.rf_level(), self.bit_error_rate())
    }
}

structure! {
    /// Preempts the call or audio of a radio on a traffic channel.
    pub struct MacRelease;
}

impl MacRelease {
    const TARGET: Field = Field::span(OCTET_3_BIT_16, 24);
    const COLOR_CODE: Field = Field::span(OCTET_6_BIT_40 + 4, 12);

    /// Whether the release is forced rather than requested.
    pub fn forced(&self) -> bool { self.0.flag(OCTET_2_BIT_8) }
    /// Whether only the radio's audio is preempted, leaving the call up.
    pub fn audio_only(&self) -> bool { self.0.flag(OCTET_2_BIT_8 + 1) }
    pub fn target(&self) -> u32 { self.0.int(&Self::TARGET) }
    pub fn color_code(&self) -> u16 { self.0.bits(&Self::COLOR_CODE) }
}

impl MacStructure for MacRelease {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        vec![
            Identifier::radio(Role::To, self.target()),
            Identifier::new(Role::Any, Value::ColorCode(self.color_code())),
        ]
    }
}

impl fmt::Display for MacRelease {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MAC RELEASE {} {} TO:{} COLOR CODE:{:03X}",
            if self.forced() { "FORCED" } else { "UNFORCED" },
            if self.audio_only() { "AUDIO" } else { "CALL" },
            self.target(), self.color_code())
    }
}
