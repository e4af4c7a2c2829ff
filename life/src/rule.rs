use std::fmt::Display;

/// Outer-totalistic rule held as neighbour-count bit masks: bit `n` of `born`
/// is set when a dead cell with `n` live neighbours comes alive, bit `n` of
/// `survive` when a live cell with `n` live neighbours stays alive.
///
/// Only B3/S23 is constructed. `Life::next` assumes a dead cell with no live
/// neighbours stays dead, so nothing is born more than one cell outside the
/// tracked bounds; any other rule needs that scan range worked out again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    born: u16,
    survive: u16,
}

impl Rule {
    pub const B3_S23: Rule = Rule {
        born: 1 << 3,
        survive: 1 << 2 | 1 << 3,
    };

    pub fn apply(&self, alive: bool, neighbours: u32) -> bool {
        let mask = if alive { self.survive } else { self.born };
        mask & 1 << neighbours != 0
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::B3_S23
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = |mask: u16| (0..=8).filter(move |&n| mask & 1 << n != 0);
        write!(f, "B")?;
        for n in counts(self.born) {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in counts(self.survive) {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b3_s23() {
        let rule = Rule::default();
        for n in 0..=8 {
            assert_eq!(rule.apply(false, n), n == 3, "dead with {n}");
            assert_eq!(rule.apply(true, n), n == 2 || n == 3, "alive with {n}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::B3_S23.to_string(), "B3/S23");
    }
}
