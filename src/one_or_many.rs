use std::iter;

use itertools::Either;

/// Either a single item or an iterable of items.
///
/// `prepend` and `append` splice the elements of `Many` individually and insert
/// `One` as a single item. `try_flatten` treats `One` as a non-iterable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OneOrMany<T, J> {
    One(T),
    Many(J),
}

/// Iterator over the elements held by a [`OneOrMany`].
pub type OneOrManyIter<T, J> = Either<iter::Once<T>, <J as IntoIterator>::IntoIter>;

impl<T> OneOrMany<T, iter::Empty<T>> {
    pub fn one(item: T) -> Self {
        OneOrMany::One(item)
    }
}

impl<T, J: IntoIterator<Item = T>> OneOrMany<T, J> {
    pub fn many(items: J) -> Self {
        OneOrMany::Many(items)
    }
}

impl<T, J: IntoIterator<Item = T>> IntoIterator for OneOrMany<T, J> {
    type Item = T;
    type IntoIter = OneOrManyIter<T, J>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            OneOrMany::One(item) => Either::Left(iter::once(item)),
            OneOrMany::Many(items) => Either::Right(items.into_iter()),
        }
    }
}
