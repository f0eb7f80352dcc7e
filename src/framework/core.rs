//! # Core Optional Container
//!
//! This module defines the generic building block the rest of the crate leans on.
//!
//! ## Key Types
//!
//! - [`Optional`]: A value of type `T`, or the deliberate absence of one.
//! - [`OptionFunctor`]: The same `map` / `flat_map` pair, bolted onto `std::option::Option`.
//! - [`Presence`]: Anything that can be read as "maybe a value" (used by the sequence combinators).

// =============================================================================
// 1. THE CONTAINER
// =============================================================================

/// A value of type `T`, or the deliberate absence of one.
///
/// # Architecture Note
/// Absence is *data*, not an error. Nothing in this crate raises when a value is
/// missing; it simply hands back `Absent` and lets the caller keep composing.
///
/// The two combinators are what make this a functor and a monad:
/// - [`Optional::map`] transforms the value *inside* the container.
/// - [`Optional::flat_map`] lets the transformation itself return a container,
///   and hands that container back without wrapping it a second time.
///
/// ```rust
/// use functor_recipe::framework::Optional;
///
/// let name = Optional::present("Jimmy");
/// let greeting = name.map(|n| format!("Your name is {}", n));
/// assert_eq!(greeting, Optional::present("Your name is Jimmy".to_string()));
///
/// let nobody: Optional<&str> = Optional::Absent;
/// assert!(nobody.map(|n| n.len()).is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Optional<T> {
    /// Wraps a value.
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The empty container.
    pub fn absent() -> Self {
        Optional::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Transforms the present value, leaving absence untouched.
    ///
    /// `f` is never called on the absent path.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Chains an optional-producing step.
    ///
    /// Unlike [`Optional::map`], the result of `f` is returned as-is, so chaining
    /// optional steps never yields `Optional<Optional<U>>`.
    ///
    /// ```rust
    /// use functor_recipe::framework::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::Absent };
    ///
    /// assert_eq!(Optional::present(8).flat_map(half).flat_map(half), Optional::present(2));
    /// assert_eq!(Optional::present(6).flat_map(half).flat_map(half), Optional::Absent);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Borrows the contents.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Converts into the standard library's `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Iterates over the zero or one contained value.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Collapses one level of nesting. Same as `flat_map(|inner| inner)`.
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// 2. THE SAME PAIR ON `Option`
// =============================================================================

/// `map` and `flat_map` written out by hand for `std::option::Option`.
///
/// `Option` already ships `map` and `and_then`; this trait spells them out with a
/// plain `match` so the two shapes can be compared side by side with [`Optional`].
///
/// ```rust
/// use functor_recipe::framework::OptionFunctor;
///
/// let nested = Some(Some(10));
/// assert_eq!(nested.flat_map(|inner| inner), Some(10));
/// assert_eq!(Some(2).fmap(|x| x * 2), Some(4));
/// ```
pub trait OptionFunctor<T> {
    /// Transforms the contained value, if any.
    fn fmap<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U;

    /// Chains an `Option`-producing step without nesting the result.
    fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;
}

impl<T> OptionFunctor<T> for Option<T> {
    fn fmap<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(value) => Some(f(value)),
            None => None,
        }
    }

    fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }
}

// =============================================================================
// 3. PRESENCE
// =============================================================================

/// Anything that is "maybe a `Self::Item`".
///
/// The sequence combinators accept transformations returning either [`Optional`]
/// or `Option`; this trait is the seam that lets them treat both the same way.
pub trait Presence {
    type Item;

    fn into_present(self) -> Option<Self::Item>;
}

impl<T> Presence for Option<T> {
    type Item = T;

    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T> Presence for Optional<T> {
    type Item = T;

    fn into_present(self) -> Option<T> {
        self.into_option()
    }
}

// =============================================================================
// 4. TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::probe::CallProbe;

    fn half(x: i32) -> Optional<i32> {
        if x % 2 == 0 {
            Optional::present(x / 2)
        } else {
            Optional::Absent
        }
    }

    #[test]
    fn map_transforms_present_value() {
        assert_eq!(Optional::present(21).map(|x| x * 2), Optional::present(42));
    }

    #[test]
    fn map_skips_function_when_absent() {
        let probe = CallProbe::new(|x: i32| x * 2);
        let result = Optional::<i32>::Absent.map(probe.func());

        assert_eq!(result, Optional::Absent);
        assert_eq!(probe.calls(), 0);
    }

    #[test]
    fn flat_map_returns_inner_result_unwrapped() {
        assert_eq!(Optional::present(10).flat_map(half), half(10));
        assert_eq!(Optional::present(7).flat_map(half), Optional::Absent);
    }

    #[test]
    fn flat_map_skips_function_when_absent() {
        let probe = CallProbe::new(half);
        let result = Optional::<i32>::Absent.flat_map(probe.func());

        assert_eq!(result, Optional::Absent);
        assert_eq!(probe.calls(), 0);
    }

    #[test]
    fn map_with_optional_step_nests_and_flatten_collapses() {
        let nested: Optional<Optional<i32>> = Optional::present(10).map(half);
        assert_eq!(nested, Optional::present(Optional::present(5)));
        assert_eq!(nested.flatten(), Optional::present(10).flat_map(half));
    }

    #[test]
    fn flatten_of_present_absent_is_absent() {
        let nested: Optional<Optional<i32>> = Optional::present(Optional::Absent);
        assert_eq!(nested.flatten(), Optional::Absent);
    }

    #[test]
    fn converts_to_and_from_option() {
        assert_eq!(Optional::from(Some(3)), Optional::present(3));
        assert_eq!(Optional::<i32>::from(None), Optional::Absent);
        assert_eq!(Optional::present("x").into_option(), Some("x"));
        assert_eq!(Option::<u8>::from(Optional::Absent), None);
    }

    #[test]
    fn default_is_absent() {
        assert_eq!(Optional::<String>::default(), Optional::Absent);
    }

    #[test]
    fn iterates_zero_or_one_element() {
        assert_eq!(Optional::present(4).into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Optional::<i32>::Absent.iter().count(), 0);
    }

    #[test]
    fn unwrap_or_else_only_runs_on_absent() {
        let probe = CallProbe::new(|_: ()| 0);
        assert_eq!(Optional::present(9).unwrap_or_else(|| probe.call(())), 9);
        assert_eq!(probe.calls(), 0);
        assert_eq!(Optional::Absent.unwrap_or(1), 1);
    }

    #[test]
    fn option_functor_matches_optional() {
        let probe = CallProbe::new(|x: i32| x + 1);
        assert_eq!(None::<i32>.fmap(probe.func()), None);
        assert_eq!(probe.calls(), 0);

        assert_eq!(Some(1).fmap(probe.func()), Some(2));
        assert_eq!(probe.calls(), 1);

        assert_eq!(Some(Some(10)).flat_map(|inner| inner), Some(10));
        assert_eq!(Some(3).flat_map(|x| half(x).into_option()), None);
    }

    #[test]
    fn option_flat_map_skips_function_when_none() {
        let halve = CallProbe::new(|x: i32| half(x).into_option());
        assert_eq!(None::<i32>.flat_map(halve.func()), None);
        assert_eq!(halve.calls(), 0);

        assert_eq!(Some(4).flat_map(halve.func()), Some(2));
        assert_eq!(halve.calls(), 1);
    }

    #[test]
    fn presence_reads_both_shapes() {
        assert_eq!(Some(1).into_present(), Some(1));
        assert_eq!(Optional::present(1).into_present(), Some(1));
        assert_eq!(Optional::<i32>::Absent.into_present(), None);
    }
}
