use std::fmt;

use crate::{
    error::{FluentError, Result},
    one_or_many::OneOrMany,
};

/// Flattens a sequence of [`OneOrMany`] items, yielding an error for every
/// `One` item at the point it is reached.
pub struct TryFlatten<I, J: IntoIterator> {
    iter: I,
    front: Option<J::IntoIter>,
    // position of the next item pulled from `iter`
    next_pos: usize,
}

impl<I, J> TryFlatten<I, J>
where
    I: Iterator<Item = OneOrMany<J::Item, J>>,
    J: IntoIterator,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            front: None,
            next_pos: 0,
        }
    }
}

impl<I, J> fmt::Debug for TryFlatten<I, J>
where
    I: fmt::Debug,
    J: IntoIterator,
    J::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFlatten")
            .field("iter", &self.iter)
            .field("front", &self.front)
            .field("next_pos", &self.next_pos)
            .finish()
    }
}

impl<I, J> Iterator for TryFlatten<I, J>
where
    I: Iterator<Item = OneOrMany<J::Item, J>>,
    J: IntoIterator,
{
    type Item = Result<J::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(front) = &mut self.front {
                match front.next() {
                    Some(elem) => return Some(Ok(elem)),
                    None => self.front = None,
                }
            }
            let pos = self.next_pos;
            let item = self.iter.next()?;
            self.next_pos += 1;
            match item {
                OneOrMany::Many(items) => {
                    self.front = Some(items.into_iter());
                }
                OneOrMany::One(_) => return Some(Err(FluentError::not_iterable(pos))),
            }
        }
    }
}
