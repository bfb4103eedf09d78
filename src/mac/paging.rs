//! Paging structures, whose length depends on the number of entries they carry.

use std::fmt;

use consts::OCTET_3_BIT_16;
use field::Field;
use ident::{Identifier, Role, Talkgroup, Value};
use mac::fields::MacFields;
use mac::structure::MacStructure;

structure! {
    /// Pages up to four groups to return to the control channel.
    pub struct IndirectGroupPagingWithoutPriority;
}

impl IndirectGroupPagingWithoutPriority {
    /// Paged groups, in order. Entries beyond the end of the buffer are left out.
    pub fn groups(&self) -> Vec<Talkgroup> {
        (0..self.0.page_count())
            .map(|i| Field::span(OCTET_3_BIT_16 + i * 16, 16))
            .take_while(|field| self.0.contains(field))
            .map(|field| self.0.talkgroup(&field))
            .collect()
    }
}

impl MacStructure for IndirectGroupPagingWithoutPriority {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        self.groups().into_iter()
            .map(|tg| Identifier::new(Role::To, Value::Talkgroup(tg)))
            .collect()
    }
}

impl fmt::Display for IndirectGroupPagingWithoutPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "INDIRECT GROUP PAGING")?;

        for tg in self.groups() {
            write!(f, " TG:{}", tg)?;
        }

        Ok(())
    }
}

/// Radio paged by an individual paging structure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Page {
    pub target: u32,
    pub priority: bool,
}

structure! {
    /// Pages up to four radios to return to the control channel, each with a priority
    /// flag.
    pub struct IndividualPagingWithPriority;
}

impl IndividualPagingWithPriority {
    /// Paged radios, in order. Entries beyond the end of the buffer are left out.
    pub fn pages(&self) -> Vec<Page> {
        (0..self.0.page_count())
            .map(|i| (i, Field::span(OCTET_3_BIT_16 + i * 24, 24)))
            .take_while(|&(_, ref field)| self.0.contains(field))
            .map(|(i, field)| Page {
                target: self.0.int(&field),
                priority: self.0.flag(8 + i),
            })
            .collect()
    }
}

impl MacStructure for IndividualPagingWithPriority {
    fn fields(&self) -> &MacFields { &self.0 }

    fn identifiers(&self) -> Vec<Identifier> {
        self.pages().iter().map(|p| Identifier::radio(Role::To, p.target)).collect()
    }
}

impl fmt::Display for IndividualPagingWithPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "INDIVIDUAL PAGING")?;

        for p in self.pages() {
            write!(f, " RADIO:{}{}", p.target, if p.priority { "(PRIORITY)" } else { "" })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mac::fields::MacFields;

    fn fields(hex: &str) -> MacFields { MacFields::from_hex(hex).unwrap() }

    #[test]
    fn test_group_paging() {
        let s = IndirectGroupPagingWithoutPriority::new(fields("11 03 0001 0002 0003 FFFF"));
        assert_eq!(s.length(), 8);
        assert_eq!(s.groups(), vec![
            Talkgroup::Default,
            Talkgroup::Other(2),
            Talkgroup::Other(3),
        ]);
        assert_eq!(s.identifiers().len(), 3);
        assert_eq!(format!("{}", s), "INDIRECT GROUP PAGING TG:1 TG:2 TG:3");

        let s = IndirectGroupPagingWithoutPriority::new(fields("11 00 0001 0002 0003 FFFF"));
        assert_eq!(s.length(), 10);
        assert_eq!(s.groups()[3], Talkgroup::Everyone);
    }

    #[test]
    fn test_truncated_paging() {
        let s = IndirectGroupPagingWithoutPriority::new(fields("11 03 0001 0002"));
        assert_eq!(s.length(), 8);
        assert_eq!(s.groups().len(), 2);
    }

    #[test]
    fn test_individual_paging() {
        let s = IndividualPagingWithPriority::new(fields("12 42 000001 000002"));
        assert_eq!(s.length(), 8);
        assert_eq!(s.pages(), vec![
            Page { target: 1, priority: false },
            Page { target: 2, priority: true },
        ]);
        assert_eq!(format!("{}", s), "INDIVIDUAL PAGING RADIO:1 RADIO:2(PRIORITY)");
    }
}
