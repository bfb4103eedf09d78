//! Encryption parameters announced alongside traffic.

use std::fmt;

use consts::ALGORITHM_UNENCRYPTED;

/// Encryption algorithm and key used for a call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct EncryptionKey {
    /// Algorithm ID.
    pub algorithm: u8,
    /// Key ID within the algorithm's keyset.
    pub key: u16,
}

impl EncryptionKey {
    pub fn new(algorithm: u8, key: u16) -> EncryptionKey {
        EncryptionKey {
            algorithm: algorithm,
            key: key,
        }
    }

    /// Whether traffic is actually encrypted.
    pub fn is_encrypted(&self) -> bool { self.algorithm != ALGORITHM_UNENCRYPTED }

    /// Human-readable algorithm name.
    pub fn algorithm_name(&self) -> &'static str {
        match self.algorithm {
            0x80 => "UNENCRYPTED",
            0x81 => "DES-OFB",
            0x83 => "TRIPLE-DES",
            0x84 => "AES-256",
            0x85 => "AES-128",
            0xAA => "ADP",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} KEY:{:04X}", self.algorithm_name(), self.key)
    }
}
