use crate::Life;

impl PartialEq for Life {
    fn eq(&self, other: &Self) -> bool {
        // Same live cells, whatever storage or bounds each board has grown.
        self.cells().eq(other.cells())
    }
}

impl Eq for Life {}

#[cfg(test)]
mod tests {
    use crate::Life;

    #[test]
    fn test_ignores_bounds() {
        let a: Life = [(0, 0), (0, 1)].into_iter().collect();
        let mut b: Life = [(-5, -5), (0, 0), (0, 1), (7, 7)].into_iter().collect();
        assert_ne!(a, b);
        b.set(-5, -5, false);
        b.set(7, 7, false);
        assert_eq!(a, b);
    }
}
