use quickcheck::{Arbitrary, Gen};

use midbst::Tree;

/// A range small enough to build quickly, placed anywhere in `i64`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SmallRange {
    pub(crate) low: i64,
    pub(crate) high: i64,
}

impl SmallRange {
    pub(crate) fn build(&self) -> Tree {
        Tree::build(self.low, self.high)
    }

    pub(crate) fn size(&self) -> usize {
        (self.high - self.low + 1) as usize
    }

    pub(crate) fn contains(&self, x: i64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl Arbitrary for SmallRange {
    /// Tells quickcheck how to pick a start (sometimes right at the edges of
    /// `i64`) and a size of at most a couple hundred values.
    fn arbitrary(g: &mut Gen) -> Self {
        let size = i64::from(u8::arbitrary(g)) + 1;
        let low = match g.choose(&[0, 1, 2]).unwrap() {
            0 => i64::MIN,
            1 => i64::MAX - (size - 1),
            2 => i64::from(i16::arbitrary(g)),
            _ => unreachable!(),
        };

        Self {
            low,
            high: low + (size - 1),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let low = self.low;
        let high = self.high;
        Box::new(
            (self.size() as i64 - 1)
                .shrink()
                .map(move |span| Self {
                    low,
                    high: low + span,
                })
                .filter(move |r| r.high <= high),
        )
    }
}
