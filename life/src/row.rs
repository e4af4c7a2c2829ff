use bitvec::vec::BitVec;

/// Which half of a row or board an index lands in, and where inside it.
///
/// Non-negative indices map to themselves. Negative indices map to
/// `-(index + 1)`, so -1 is slot 0 of the negative half, -2 is slot 1 and so
/// on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Neg(usize),
    Pos(usize),
}

impl Half {
    pub fn of(index: isize) -> Self {
        if index < 0 {
            Half::Neg((-(index + 1)) as usize)
        } else {
            Half::Pos(index as usize)
        }
    }
}

/// One horizontal line of cells. Bits past the end of either half are dead.
#[derive(Clone, Default, Debug)]
pub struct Row {
    neg: Option<BitVec>,
    pos: Option<BitVec>,
}

impl Row {
    pub fn get(&self, col: isize) -> bool {
        let (bits, i) = match Half::of(col) {
            Half::Neg(i) => (&self.neg, i),
            Half::Pos(i) => (&self.pos, i),
        };
        bits.as_ref()
            .and_then(|b| b.get(i).map(|b| *b))
            .unwrap_or(false)
    }

    pub fn set(&mut self, col: isize, value: bool) {
        let (bits, i) = match Half::of(col) {
            Half::Neg(i) => (&mut self.neg, i),
            Half::Pos(i) => (&mut self.pos, i),
        };
        let bits = bits.get_or_insert_with(BitVec::new);
        if i >= bits.len() {
            if !value {
                return;
            }
            bits.resize(i + 1, false);
        }
        bits.set(i, value);
    }

    /// Zeroes both halves, keeping their length for reuse.
    pub fn clear(&mut self) {
        for bits in [&mut self.neg, &mut self.pos].into_iter().flatten() {
            bits.fill(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half() {
        assert_eq!(Half::of(0), Half::Pos(0));
        assert_eq!(Half::of(5), Half::Pos(5));
        assert_eq!(Half::of(-1), Half::Neg(0));
        assert_eq!(Half::of(-2), Half::Neg(1));
        assert_eq!(Half::of(isize::MIN), Half::Neg(isize::MAX as usize));
    }

    #[test]
    fn test_get_set() {
        let mut row = Row::default();
        for col in [-70, -2, -1, 0, 1, 64, 70, 200] {
            assert!(!row.get(col));
            row.set(col, true);
            assert!(row.get(col));
        }
        row.set(-1, false);
        row.set(64, false);
        assert!(!row.get(-1) && !row.get(64));
        assert!(row.get(0) && row.get(-2) && row.get(70));
        assert!(!row.get(63) && !row.get(65) && !row.get(199));
    }

    #[test]
    fn test_halves_are_independent() {
        let mut row = Row::default();
        row.set(-1, true);
        assert!(!row.get(0));
        assert!(row.pos.is_none());
    }

    #[test]
    fn test_clearing_unset_doesnt_grow() {
        let mut row = Row::default();
        row.set(500, false);
        row.set(-500, false);
        assert!(!row.get(500) && !row.get(-500));
        assert_eq!(row.pos.as_ref().map(|b| b.len()), Some(0));
        assert_eq!(row.neg.as_ref().map(|b| b.len()), Some(0));
    }

    #[test]
    fn test_clear_keeps_length() {
        let mut row = Row::default();
        row.set(-3, true);
        row.set(130, true);
        row.clear();
        assert!(!row.get(-3) && !row.get(130));
        assert_eq!(row.neg.as_ref().map(|b| b.len()), Some(3));
        assert_eq!(row.pos.as_ref().map(|b| b.len()), Some(131));
        row.clear();
        assert_eq!(row.pos.as_ref().map(|b| b.len()), Some(131));
    }
}
