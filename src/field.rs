//! Descriptors locating a field within a MAC structure.

/// Location of an unsigned field, relative to the first bit of a structure.
///
/// Bits are packed into the extracted value most-significant first, so the first bit
/// of the descriptor becomes the MSB of the result for both forms.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    /// Contiguous run of `len` bits beginning at `start`.
    Span { start: usize, len: usize },
    /// Explicit, ascending list of bit indices.
    Bits(&'static [usize]),
}

impl Field {
    /// Create a contiguous field of `len` bits starting at bit `start`.
    pub const fn span(start: usize, len: usize) -> Field {
        Field::Span { start: start, len: len }
    }

    /// Create a contiguous field covering bits `first` through `last`, inclusive.
    pub const fn range(first: usize, last: usize) -> Field {
        Field::Span { start: first, len: last - first + 1 }
    }

    /// Create a field from an explicit list of bit indices.
    pub const fn bits(bits: &'static [usize]) -> Field { Field::Bits(bits) }

    /// Number of bits in the field.
    pub fn len(&self) -> usize {
        match *self {
            Field::Span { len, .. } => len,
            Field::Bits(bits) => bits.len(),
        }
    }

    /// Whether the field covers no bits.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Index of the last bit covered by the field, or `None` for an empty field.
    pub fn last(&self) -> Option<usize> {
        match *self {
            Field::Span { len: 0, .. } => None,
            Field::Span { start, len } => Some(start + len - 1),
            Field::Bits(bits) => bits.iter().cloned().max(),
        }
    }

    /// Iterate over the bit indices of the field, MSB first.
    pub fn indices(&self) -> FieldIndices {
        FieldIndices {
            field: *self,
            pos: 0,
        }
    }
}

/// Iterator over the bit indices covered by a `Field`.
pub struct FieldIndices {
    field: Field,
    pos: usize,
}

impl Iterator for FieldIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let next = match self.field {
            Field::Span { start, len } if self.pos < len => Some(start + self.pos),
            Field::Span { .. } => None,
            Field::Bits(bits) => bits.get(self.pos).cloned(),
        };

        if next.is_some() {
            self.pos += 1;
        }

        next
    }
}
