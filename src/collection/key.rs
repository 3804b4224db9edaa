//! Key classification for collection entries.
//!
//! A [`Collection`](super::Collection) stores `(key, value)` pairs. Some keys
//! are integer positions (list-like collections built from a sequence), others
//! are names (associative collections built from explicit pairs). Operations
//! such as [`concat`](super::Collection::concat) and
//! [`all`](super::Collection::all) need to tell them apart, which is what
//! [`CollectionKey`] provides.

/// A key that may stand for an integer position.
///
/// Index-like keys (all primitive integers) report their position through
/// [`as_index`](Self::as_index) and can be minted with
/// [`from_index`](Self::from_index). Named keys return `None` from both.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::CollectionKey;
///
/// assert_eq!(3usize.as_index(), Some(3));
/// assert_eq!((-1i32).as_index(), None);
/// assert_eq!("name".as_index(), None);
/// assert_eq!(<u8 as CollectionKey>::from_index(7), Some(7u8));
/// assert_eq!(<String as CollectionKey>::from_index(7), None);
/// ```
pub trait CollectionKey: Clone {
    /// Returns the position this key stands for, if it is index-like.
    fn as_index(&self) -> Option<usize>;

    /// Builds an index-like key for `index`, or `None` for named key types.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_integer_key {
    ($($integer:ty),* $(,)?) => {
        $(
            impl CollectionKey for $integer {
                #[inline]
                fn as_index(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$integer>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_integer_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_named_key {
    ($($named:ty),* $(,)?) => {
        $(
            impl CollectionKey for $named {
                #[inline]
                fn as_index(&self) -> Option<usize> {
                    None
                }

                #[inline]
                fn from_index(_index: usize) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_named_key!(String, char, bool);

impl CollectionKey for &str {
    #[inline]
    fn as_index(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn from_index(_index: usize) -> Option<Self> {
        None
    }
}
