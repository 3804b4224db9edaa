//! Positional argument spreading for [`Collection::map_spread`].
//!
//! [`Spread`] turns a value into a tuple of arguments and [`SpreadFn`] calls a
//! function with that tuple's elements as positional parameters. Tuples spread
//! into tuples of the same shape, so their arity is checked by the compiler.
//! Homogeneous sequences (`Vec<T>`, `[T; N]`, `Collection<K, T>`) are checked
//! at run time: a sequence shorter than the function's parameter list fails
//! with [`CollectionError::Arity`], extra elements are ignored.
//!
//! Arities 1 through 6 are supported.
//!
//! [`Collection::map_spread`]: super::Collection::map_spread

use super::{Collection, CollectionError};

/// A value that can be spread into the argument tuple `Args`.
pub trait Spread<Args> {
    /// Produces the argument tuple.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Arity`] if the value has fewer elements
    /// than `Args` needs.
    fn spread(&self) -> Result<Args, CollectionError>;
}

/// A function callable with the elements of the tuple `Args` as its
/// positional parameters.
pub trait SpreadFn<Args, Output> {
    /// Calls the function with `arguments` spread out.
    fn call_spread(&mut self, arguments: Args) -> Output;
}

macro_rules! same_type {
    ($_index:tt, $replacement:ty) => {
        $replacement
    };
}

fn leading<T>(values: &[T], expected: usize) -> Result<&[T], CollectionError> {
    if values.len() < expected {
        tracing::debug!(expected, actual = values.len(), "spread sequence too short");
        return Err(CollectionError::Arity {
            expected,
            actual: values.len(),
        });
    }
    Ok(&values[..expected])
}

macro_rules! impl_spread {
    ($arity:literal => $($name:ident : $index:tt),+) => {
        impl<$($name: Clone),+> Spread<($($name,)+)> for ($($name,)+) {
            #[inline]
            fn spread(&self) -> Result<($($name,)+), CollectionError> {
                Ok(self.clone())
            }
        }

        impl<Function, Output, $($name),+> SpreadFn<($($name,)+), Output> for Function
        where
            Function: FnMut($($name),+) -> Output,
        {
            #[inline]
            fn call_spread(&mut self, arguments: ($($name,)+)) -> Output {
                self($(arguments.$index),+)
            }
        }

        impl<T: Clone> Spread<($(same_type!($index, T),)+)> for [T] {
            fn spread(&self) -> Result<($(same_type!($index, T),)+), CollectionError> {
                let values = leading(self, $arity)?;
                Ok(($(values[$index].clone(),)+))
            }
        }

        impl<T: Clone> Spread<($(same_type!($index, T),)+)> for Vec<T> {
            #[inline]
            fn spread(&self) -> Result<($(same_type!($index, T),)+), CollectionError> {
                self.as_slice().spread()
            }
        }

        impl<T: Clone, const N: usize> Spread<($(same_type!($index, T),)+)> for [T; N] {
            #[inline]
            fn spread(&self) -> Result<($(same_type!($index, T),)+), CollectionError> {
                self.as_slice().spread()
            }
        }

        impl<K: Clone, T: Clone> Spread<($(same_type!($index, T),)+)> for Collection<K, T> {
            fn spread(&self) -> Result<($(same_type!($index, T),)+), CollectionError> {
                self.to_vec().as_slice().spread()
            }
        }
    };
}

impl_spread!(1 => A: 0);
impl_spread!(2 => A: 0, B: 1);
impl_spread!(3 => A: 0, B: 1, C: 2);
impl_spread!(4 => A: 0, B: 1, C: 2, D: 3);
impl_spread!(5 => A: 0, B: 1, C: 2, D: 3, E: 4);
impl_spread!(6 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_tuple_spreads_into_itself() {
        let value = ("Ivriel", 27);
        let arguments: Result<(&str, i32), _> = value.spread();
        assert_eq!(arguments, Ok(("Ivriel", 27)));
    }

    #[rstest]
    fn test_vec_spreads_leading_elements() {
        let value = vec![1, 2, 3];
        let arguments: Result<(i32, i32), _> = value.spread();
        assert_eq!(arguments, Ok((1, 2)));
    }

    #[rstest]
    fn test_short_vec_is_an_arity_error() {
        let value = vec![1];
        let arguments: Result<(i32, i32, i32), _> = value.spread();
        assert_eq!(
            arguments,
            Err(CollectionError::Arity {
                expected: 3,
                actual: 1
            })
        );
    }

    #[rstest]
    fn test_array_spreads() {
        let value = ["a", "b"];
        let arguments: Result<(&str, &str), _> = value.spread();
        assert_eq!(arguments, Ok(("a", "b")));
    }

    #[rstest]
    fn test_call_spread_passes_positional_arguments() {
        let mut concatenate = |first: &str, second: &str, third: &str| format!("{first}{second}{third}");
        assert_eq!(concatenate.call_spread(("a", "b", "c")), "abc");
    }
}
