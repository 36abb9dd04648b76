//! A chainable wrapper over a single-pass producer.
//!
//! Non-terminal operations (`peek`, `map`, `filter`, `filterfalse`, `flatten`,
//! `try_flatten`, `enumerate`, `skip`, `prepend`, `append`) consume the wrapper
//! and return a new one around a lazily derived producer. They never pull an
//! item. Terminal operations (`all_match`, `any_match`, `none_match`, `first`,
//! `reduce`, `reduce_with`, `collect`) borrow the wrapper mutably and pull
//! items, so whatever they leave behind can still be consumed afterwards.
//!
//! A sequence is not meant to be driven by more than one reader at a time.
//! Wrapping `producer.by_ref()` lets a derived chain advance a producer that the
//! caller keeps, and both then observe the same progress.

use std::{
    convert::TryInto,
    fmt,
    iter::{self, FromIterator},
};

use crate::{
    error::{FluentError, Result},
    filter_false::FilterFalse,
    one_or_many::{OneOrMany, OneOrManyIter},
    try_flatten::TryFlatten,
};

#[derive(Debug)]
pub struct LazySequence<I> {
    iter: I,
}

impl<I: Iterator> LazySequence<I> {
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iterable.into_iter(),
        }
    }

    /// Returns the underlying producer.
    pub fn get(self) -> I {
        self.iter
    }

    /// Borrows this sequence so that a derived chain advances it in place.
    pub fn by_ref(&mut self) -> LazySequence<&mut I> {
        LazySequence {
            iter: &mut self.iter,
        }
    }

    pub fn peek<F>(self, side_effect: F) -> LazySequence<iter::Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        LazySequence {
            iter: self.iter.inspect(side_effect),
        }
    }

    pub fn map<B, F>(self, transform: F) -> LazySequence<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        LazySequence {
            iter: self.iter.map(transform),
        }
    }

    pub fn filter<P>(self, predicate: P) -> LazySequence<iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence {
            iter: self.iter.filter(predicate),
        }
    }

    pub fn filterfalse<P>(self, predicate: P) -> LazySequence<FilterFalse<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence {
            iter: FilterFalse::new(self.iter, predicate),
        }
    }

    pub fn flatten(self) -> LazySequence<iter::Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        LazySequence {
            iter: self.iter.flatten(),
        }
    }

    /// Like [`flatten`](Self::flatten), for items whose shape is only known at
    /// run time. Yields `Err(FluentError::NotIterable)` when a
    /// [`OneOrMany::One`] item is reached.
    pub fn try_flatten<T, J>(self) -> LazySequence<TryFlatten<I, J>>
    where
        I: Iterator<Item = OneOrMany<T, J>>,
        J: IntoIterator<Item = T>,
    {
        LazySequence {
            iter: TryFlatten::new(self.iter),
        }
    }

    pub fn enumerate(self) -> LazySequence<iter::Enumerate<I>> {
        LazySequence {
            iter: self.iter.enumerate(),
        }
    }

    /// Discards the first `n` items. Fails immediately if `n` is negative.
    /// Counts too large for `usize` skip everything.
    pub fn skip<N>(self, n: N) -> Result<LazySequence<iter::Skip<I>>>
    where
        N: TryInto<usize> + PartialOrd + Default + Copy + fmt::Display,
    {
        if n < N::default() {
            return Err(FluentError::invalid_count(n));
        }
        let count = n.try_into().unwrap_or(usize::MAX);
        Ok(LazySequence {
            iter: self.iter.skip(count),
        })
    }

    pub fn prepend<J>(
        self,
        insert: OneOrMany<I::Item, J>,
    ) -> LazySequence<iter::Chain<OneOrManyIter<I::Item, J>, I>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        LazySequence {
            iter: insert.into_iter().chain(self.iter),
        }
    }

    pub fn append<J>(
        self,
        insert: OneOrMany<I::Item, J>,
    ) -> LazySequence<iter::Chain<I, OneOrManyIter<I::Item, J>>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        LazySequence {
            iter: self.iter.chain(insert),
        }
    }

    /// Returns `true` if `predicate` holds for every remaining item. Stops at
    /// the first item for which it does not.
    pub fn all_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        let mut pulled = 0usize;
        for item in &mut self.iter {
            pulled += 1;
            if !predicate(item) {
                log::trace!("all_match stopped after {} items", pulled);
                return false;
            }
        }
        true
    }

    /// Returns `true` if `predicate` holds for some remaining item. Stops at
    /// the first such item.
    pub fn any_match<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        let mut pulled = 0usize;
        for item in &mut self.iter {
            pulled += 1;
            if predicate(item) {
                log::trace!("any_match stopped after {} items", pulled);
                return true;
            }
        }
        false
    }

    pub fn none_match<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    pub fn first(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// Folds the remaining items, seeding the accumulator with the first one.
    pub fn reduce<F>(&mut self, combiner: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        match self.iter.next() {
            Some(first) => Ok(self.iter.by_ref().fold(first, combiner)),
            None => {
                log::debug!("reduce called on an exhausted sequence");
                Err(FluentError::EmptyReduce)
            }
        }
    }

    pub fn reduce_with<B, F>(&mut self, initial: B, combiner: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.by_ref().fold(initial, combiner)
    }

    pub fn collect<C>(&mut self) -> C
    where
        C: FromIterator<I::Item>,
    {
        self.iter.by_ref().collect()
    }

    pub fn collect_vec(&mut self) -> Vec<I::Item> {
        self.collect()
    }

    /// Hands the remaining items to `builder`. Items the builder leaves
    /// behind are drained, so the sequence is exhausted afterwards.
    pub fn collect_with<C, B>(&mut self, builder: B) -> C
    where
        B: FnOnce(&mut I) -> C,
    {
        let built = builder(&mut self.iter);
        self.iter.by_ref().for_each(drop);
        built
    }
}

impl<I: Iterator> From<I> for LazySequence<I> {
    fn from(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> IntoIterator for LazySequence<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iter
    }
}

impl<'a, I: Iterator> IntoIterator for &'a mut LazySequence<I> {
    type Item = I::Item;
    type IntoIter = &'a mut I;

    fn into_iter(self) -> &'a mut I {
        &mut self.iter
    }
}

pub trait IntoLazySequence: IntoIterator + Sized {
    fn fluent(self) -> LazySequence<Self::IntoIter> {
        LazySequence::new(self)
    }
}

impl<T: IntoIterator> IntoLazySequence for T {}
