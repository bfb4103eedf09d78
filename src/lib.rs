//! Decoding of P25 Phase 2 MAC PDUs into typed MAC structures, with normalized
//! identifiers and reassembly of structures spanning multiple PDUs.

extern crate collect_slice;
extern crate hex;
extern crate num;

#[macro_use]
extern crate log;

#[cfg(feature = "ser")]
#[macro_use]
extern crate serde_derive;

#[cfg(feature = "ser")]
extern crate serde;

#[macro_use]
mod macros;

pub mod bits;
pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod ident;
pub mod mac;
pub mod util;
