//! Phase 2 MAC PDUs and the structures they carry.
//!
//! A MAC PDU is a header followed by one or more variable-length MAC structures. Each
//! structure begins with an opcode selecting its layout, and structures that don't fit
//! in a single PDU continue in multi-fragment continuation structures.

pub mod broadcast;
pub mod control;
pub mod data;
pub mod decode;
pub mod fields;
pub mod fragment;
pub mod generic;
pub mod opcode;
pub mod paging;
pub mod pdu;
pub mod reassembler;
pub mod registration;
pub mod response;
pub mod structure;
pub mod telephone;
pub mod unit;
pub mod vendor;
pub mod voice;

pub use self::decode::{decode, Structure};
pub use self::fields::MacFields;
pub use self::fragment::{ContinuationFragment, MultiFragment};
pub use self::opcode::{MacLength, MacOpcode, Partition};
pub use self::pdu::{MacPdu, PduType, Structures};
pub use self::reassembler::Reassembler;
pub use self::structure::MacStructure;
