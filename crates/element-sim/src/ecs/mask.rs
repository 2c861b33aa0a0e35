use super::component::Bundle;

/// Component-presence bitset. Bit `n` is set when the entity carries the
/// component whose `Component::BIT` is `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mask(u64);

impl Mask {
    pub const EMPTY: Mask = Mask(0);

    /// Number of distinct components a mask can describe.
    pub const CAPACITY: u32 = u64::BITS;

    /// Mask with one bit per component in `B`.
    ///
    /// ```
    /// use element_sim::core::components::{Creep, Transform};
    /// use element_sim::ecs::Mask;
    ///
    /// let creeps = Mask::of::<(Creep, Transform)>();
    /// assert!(creeps.test(Mask::of::<(Creep,)>()));
    /// ```
    pub fn of<B: Bundle>() -> Mask {
        B::mask()
    }

    pub const fn with(self, bit: u32) -> Mask {
        Mask(self.0 | (1 << bit))
    }

    pub const fn without(self, bit: u32) -> Mask {
        Mask(self.0 & !(1 << bit))
    }

    pub const fn has(self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }

    /// True iff every bit of `query` is also set in `self`.
    pub const fn test(self, query: Mask) -> bool {
        self.0 & query.0 == query.0
    }

    pub const fn union(self, other: Mask) -> Mask {
        Mask(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_superset_check() {
        let entity = Mask::EMPTY.with(0).with(3).with(5);
        assert!(entity.test(Mask::EMPTY.with(3)));
        assert!(entity.test(Mask::EMPTY.with(0).with(5)));
        assert!(!entity.test(Mask::EMPTY.with(1)));
        assert!(!entity.test(Mask::EMPTY.with(3).with(4)));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(Mask::EMPTY.test(Mask::EMPTY));
        assert!(Mask::EMPTY.with(9).test(Mask::EMPTY));
    }

    #[test]
    fn with_without_round_trip() {
        let m = Mask::EMPTY.with(63).with(2);
        assert!(m.has(63));
        assert_eq!(m.count(), 2);
        assert_eq!(m.without(63).without(2), Mask::EMPTY);
        assert!(m.without(2).union(Mask::EMPTY.with(2)) == m);
    }
}
