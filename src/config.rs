//! Decoder configuration.

/// Options controlling structure dispatch and fragment reassembly.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "ser", serde(default))]
pub struct Config {
    /// Whether to decode manufacturer-specific structures. When false, every opcode in
    /// the vendor partition decodes as an unknown vendor structure.
    pub vendor_extensions: bool,
    /// Maximum number of incomplete multi-fragment structures held while waiting for
    /// continuation fragments.
    pub max_pending_fragments: usize,
    /// Whether iteration over a PDU's structures stops at the first null information
    /// structure.
    pub stop_at_null: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            vendor_extensions: true,
            max_pending_fragments: 4,
            stop_at_null: true,
        }
    }
}

impl Config {
    /// Set whether manufacturer-specific structures are decoded.
    pub fn vendor_extensions(mut self, enable: bool) -> Self {
        self.vendor_extensions = enable;
        self
    }

    /// Set the maximum number of pending multi-fragment structures. Zero disables
    /// reassembly, passing every structure straight through.
    pub fn max_pending_fragments(mut self, max: usize) -> Self {
        self.max_pending_fragments = max;
        self
    }

    /// Set whether iteration stops at null information.
    pub fn stop_at_null(mut self, stop: bool) -> Self {
        self.stop_at_null = stop;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builder() {
        let c = Config::default()
            .vendor_extensions(false)
            .max_pending_fragments(1);

        assert!(!c.vendor_extensions);
        assert_eq!(c.max_pending_fragments, 1);
        assert!(c.stop_at_null);
    }
}
