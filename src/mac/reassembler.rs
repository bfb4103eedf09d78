//! Reassembly of multi-fragment structures across PDUs.
//!
//! Incomplete multi-fragment structures are held until continuation fragments complete
//! them. Each continuation attaches to the most recent incomplete structure.

use std::collections::VecDeque;

use config::Config;
use mac::decode::Structure;
use mac::structure::MacStructure;

/// Attaches continuation fragments to the multi-fragment structures they extend.
pub struct Reassembler {
    config: Config,
    /// Incomplete structures, oldest first.
    pending: VecDeque<Structure>,
}

impl Reassembler {
    /// Create a new `Reassembler` with no pending structures.
    pub fn new(config: Config) -> Reassembler {
        Reassembler {
            config: config,
            pending: VecDeque::new(),
        }
    }

    /// Number of incomplete structures being held.
    pub fn pending(&self) -> usize { self.pending.len() }

    /// Feed in the next decoded structure, returning any structures ready for the
    /// caller in arrival order.
    ///
    /// A continuation that completes its structure yields that structure. A continuation
    /// with nothing to attach to is passed through unchanged. Incomplete multi-fragment
    /// structures are held, and when more than the configured maximum are held the
    /// oldest is released as is.
    pub fn feed(&mut self, s: Structure) -> Vec<Structure> {
        if self.config.max_pending_fragments == 0 {
            return vec![s];
        }

        match s {
            Structure::ContinuationFragment(frag) => {
                let complete = match self.pending.back_mut()
                    .and_then(|p| p.as_multi_fragment_mut())
                {
                    Some(draft) => {
                        draft.add_continuation(frag);
                        draft.is_complete()
                    },
                    None => {
                        debug!("continuation fragment without pending structure");
                        return vec![Structure::ContinuationFragment(frag)];
                    },
                };

                if complete {
                    self.pending.pop_back().into_iter().collect()
                } else {
                    vec![]
                }
            },
            s => {
                let incomplete = s.as_multi_fragment().map_or(false, |m| !m.is_complete());

                if !incomplete {
                    return vec![s];
                }

                self.pending.push_back(s);

                let mut out = vec![];

                while self.pending.len() > self.config.max_pending_fragments {
                    if let Some(old) = self.pending.pop_front() {
                        warn!("evicting incomplete {} awaiting continuation", old.opcode());
                        out.push(old);
                    }
                }

                out
            },
        }
    }

    /// Release all held structures, complete or not, oldest first.
    pub fn flush(&mut self) -> Vec<Structure> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bits::BitBuffer;
    use mac::decode::decode;
    use mac::opcode::MacOpcode;

    fn structure(hex: &str) -> Structure {
        decode(&BitBuffer::from_hex(hex).unwrap(), 0, &Config::default())
    }

    fn lcch() -> Structure { structure("C7 12 1A 00 0001 0002 000ABC BEE003A1000123") }
    fn continuation() -> Structure { structure("10 0C 000DEF BEE003A1000456") }

    #[test]
    fn test_complete() {
        let mut r = Reassembler::new(Config::default());

        assert!(r.feed(lcch()).is_empty());
        assert_eq!(r.pending(), 1);

        let out = r.feed(continuation());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].opcode(), MacOpcode::UnitToUnitVoiceChannelGrantExtendedLcch);
        assert!(out[0].as_multi_fragment().unwrap().is_complete());
        assert_eq!(r.pending(), 0);
    }

    #[test]
    fn test_partial() {
        let mut r = Reassembler::new(Config::default());

        assert!(r.feed(lcch()).is_empty());
        assert!(r.feed(structure("10 04 000D")).is_empty());
        assert_eq!(r.pending(), 1);

        let out = r.flush();
        assert_eq!(out.len(), 1);
        assert!(!out[0].as_multi_fragment().unwrap().is_complete());
        assert_eq!(r.pending(), 0);
    }

    #[test]
    fn test_passthrough() {
        let mut r = Reassembler::new(Config::default());

        let out = r.feed(structure("C080206430C8123456789A"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].opcode(), MacOpcode::GroupVoiceChannelGrantExplicit);

        let out = r.feed(continuation());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].opcode(), MacOpcode::MultiFragmentContinuation);
        assert_eq!(r.pending(), 0);
    }

    #[test]
    fn test_newest_draft() {
        let mut r = Reassembler::new(Config::default());

        assert!(r.feed(lcch()).is_empty());
        assert!(r.feed(structure("C7 12 1A 00 0003 0004 000ABC BEE003A1000123")).is_empty());

        let out = r.feed(continuation());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].channels(), structure("C7 12 1A 00 0003 0004 000ABC BEE003A1000123")
            .channels());
        assert_eq!(r.pending(), 1);
    }

    #[test]
    fn test_eviction() {
        let mut r = Reassembler::new(Config::default().max_pending_fragments(1));

        assert!(r.feed(lcch()).is_empty());

        let out = r.feed(lcch());
        assert_eq!(out.len(), 1);
        assert!(!out[0].as_multi_fragment().unwrap().is_complete());
        assert_eq!(r.pending(), 1);
    }

    #[test]
    fn test_disabled() {
        let mut r = Reassembler::new(Config::default().max_pending_fragments(0));

        let out = r.feed(lcch());
        assert_eq!(out.len(), 1);
        assert_eq!(r.pending(), 0);

        let out = r.feed(continuation());
        assert_eq!(out[0].opcode(), MacOpcode::MultiFragmentContinuation);
    }
}
