//! Interface common to all decoded MAC structures.

use std::fmt;

use ident::{ChannelDescriptor, Identifier, ServiceOptions};
use mac::fields::MacFields;
use mac::opcode::MacOpcode;

/// Decoded MAC structure, bound to one position within one buffer.
///
/// Accessors decode on demand from the underlying bits and never cache, so a structure
/// is a cheap view that can be cloned freely.
pub trait MacStructure: fmt::Display {
    /// Base fields the structure decodes from.
    fn fields(&self) -> &MacFields;

    /// Type of the structure.
    fn opcode(&self) -> MacOpcode { self.fields().opcode() }

    /// Length of the structure in octets, including its opcode.
    fn length(&self) -> usize { self.fields().length(self.opcode()) }

    /// Identifiers resolvable from the structure as currently received.
    fn identifiers(&self) -> Vec<Identifier>;

    /// Channels described by the structure.
    fn channels(&self) -> Vec<ChannelDescriptor> { Vec::new() }

    /// Service options requested or granted, for structures that carry them.
    fn service_options(&self) -> Option<ServiceOptions> { None }
}
