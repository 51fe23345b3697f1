//! A two slot holder, like a map entry.
//!
//! Both slots are set at construction. Afterwards only the second slot can be changed (with
//! [`Pair::replace_second`]), the first slot is fixed for the life of the pair.
use std::any::Any;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    /// Same as [`Pair::new`]
    pub fn of(first: A, second: B) -> Self {
        Pair::new(first, second)
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn key(&self) -> &A {
        self.first()
    }

    pub fn value(&self) -> &B {
        self.second()
    }

    /// Put `new` in the second slot, and return what was there before.
    pub fn replace_second(&mut self, new: B) -> B {
        std::mem::replace(&mut self.second, new)
    }

    pub fn set_value(&mut self, new: B) -> B {
        self.replace_second(new)
    }

    /// New pair with first & second swapped.
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Like [`Pair::swap`], but leaves `self` alone.
    pub fn swapped(&self) -> Pair<B, A>
    where
        A: Clone,
        B: Clone,
    {
        Pair::new(self.second.clone(), self.first.clone())
    }

    pub fn as_ref(&self) -> Pair<&A, &B> {
        Pair::new(&self.first, &self.second)
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Is `other` a `Pair<A, B>` which is equal to this one?
    ///
    /// Anything else, including a pair with different types in it, is not equal.
    pub fn eq_any(&self, other: &dyn Any) -> bool
    where
        A: PartialEq + 'static,
        B: PartialEq + 'static,
    {
        other
            .downcast_ref::<Pair<A, B>>()
            .is_some_and(|other| self == other)
    }
}

impl<A: Clone, B: Clone> Pair<&A, &B> {
    pub fn cloned(self) -> Pair<A, B> {
        Pair::new(self.first.clone(), self.second.clone())
    }
}

impl<A: Copy, B: Copy> Pair<&A, &B> {
    pub fn copied(self) -> Pair<A, B> {
        Pair::new(*self.first, *self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(p: Pair<A, B>) -> Self {
        p.into_inner()
    }
}

impl<A, B, C, D> PartialEq<Pair<C, D>> for Pair<A, B>
where
    A: PartialEq<C>,
    B: PartialEq<D>,
{
    fn eq(&self, other: &Pair<C, D>) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<A: Eq, B: Eq> Eq for Pair<A, B> {}

impl<A: Hash, B: Hash> Hash for Pair<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "key: {}, and value: {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn hash_of(x: &impl Hash) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }

    macro_rules! test_round_trip {
        ( $name:ident, $a:expr, $b:expr ) => {
            #[test]
            fn $name() {
                let p = Pair::new($a, $b);
                assert_eq!(p.first(), &$a);
                assert_eq!(p.second(), &$b);
                assert_eq!(p.key(), &$a);
                assert_eq!(p.value(), &$b);
                assert_eq!(p.clone().swap().swap(), p);
            }
        };
    }

    test_round_trip!(round_trip1, "evyatar", 1.5);
    test_round_trip!(round_trip2, 0_u8, 'z');
    test_round_trip!(round_trip3, String::from("a"), vec![1, 2, 3]);
    test_round_trip!(round_trip4, (), Some(-1_i64));

    #[test]
    fn of1() {
        assert_eq!(Pair::of("a", 1), Pair::new("a", 1));
    }

    #[test]
    fn replace_second1() {
        let mut p = Pair::new("evyatar", 1.5);
        let prev = p.replace_second(3.75);
        assert_eq!(prev, 1.5);
        assert_eq!(p.second(), &3.75);
        assert_eq!(p.first(), &"evyatar");

        let prev = p.set_value(0.);
        assert_eq!(prev, 3.75);
        assert_eq!(p, Pair::new("evyatar", 0.));
    }

    #[test]
    fn swap1() {
        let p = Pair::new("evyatar", 1.5);
        let s = p.swap();
        assert_eq!(s.first(), &1.5);
        assert_eq!(s.second(), &"evyatar");
        // Copy, so p is still usable & unchanged
        assert_eq!(p.second(), &1.5);
    }

    #[test]
    fn swapped1() {
        let p = Pair::new(String::from("evyatar"), vec![1]);
        let s = p.swapped();
        assert_eq!(s, Pair::new(vec![1], String::from("evyatar")));
        assert_eq!(p, Pair::new(String::from("evyatar"), vec![1]));
    }

    #[test]
    fn eq1() {
        assert_eq!(Pair::new("k", 1.5), Pair::new("k", 1.5));
        assert_ne!(Pair::new("k", 1.5), Pair::new("k", 1.6));
        assert_ne!(Pair::new("k", 1.5), Pair::new("j", 1.5));
    }

    #[test]
    fn eq_mixed_types() {
        assert_eq!(Pair::new(String::from("k"), 2), Pair::new("k", 2));
    }

    #[test]
    fn eq_any1() {
        let p = Pair::new("evyatar", 2);
        let same = Pair::new("evyatar", 2);
        let swapped = p.swap();
        assert!(p.eq_any(&same));
        assert!(!p.eq_any(&swapped));
        assert!(!p.eq_any(&"evyatar"));
        assert!(!p.eq_any(&Pair::new("evyatar", 2_u64)));
        assert!(!p.eq_any(&Pair::new("evyatar", 3)));
    }

    #[test]
    fn eq_any_swap_back() {
        let p = Pair::new("k", 1.5);
        assert!(p.eq_any(&Pair::new(1.5, "k").swap()));
    }

    #[test]
    fn hash1() {
        assert_eq!(hash_of(&Pair::new("evyatar", 2)), hash_of(&Pair::new("evyatar", 2)));
    }

    #[test]
    fn hash_order_matters() {
        assert_ne!(hash_of(&Pair::new(1, 2)), hash_of(&Pair::new(2, 1)));
    }

    #[test]
    fn display1() {
        assert_eq!(
            Pair::new("evyatar", 1.5).to_string(),
            "key: evyatar, and value: 1.5"
        );
        assert_eq!(
            Pair::new("evyatar", 1.5).to_string(),
            Pair::new("evyatar", 1.5).to_string()
        );
    }

    #[test]
    fn eq_implies_same_hash_and_display() {
        let pairs = [(1, 'a'), (1, 'b'), (2, 'a'), (1, 'a')].map(|(a, b)| Pair::new(a, b));
        for p in pairs.iter() {
            for q in pairs.iter() {
                if p == q {
                    assert_eq!(hash_of(p), hash_of(q));
                    assert_eq!(p.to_string(), q.to_string());
                }
            }
        }
    }

    #[test]
    fn tuple1() {
        let p: Pair<_, _> = (1, "x").into();
        assert_eq!(p, Pair::new(1, "x"));
        let t: (i32, &str) = p.into();
        assert_eq!(t, (1, "x"));
    }

    #[test]
    fn refs1() {
        let p = Pair::new(String::from("a"), 5);
        let r = p.as_ref();
        assert_eq!(r.first().as_str(), "a");
        assert_eq!(r.cloned(), p);

        let p = Pair::new(3, 4);
        assert_eq!(p.as_ref().copied(), p);
    }

    #[test]
    fn json1() {
        let p = Pair::new("k", 1.5);
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"first":"k","second":1.5}"#
        );
    }
}
