use std::{cell::Cell, rc::Rc};

/// A producer that counts how many times it has been pulled.
pub(crate) struct CountingProducer<I> {
    iter: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iterator> CountingProducer<I> {
    pub(crate) fn new<T>(items: T) -> (Self, Rc<Cell<usize>>)
    where
        T: IntoIterator<IntoIter = I>,
    {
        let pulls = Rc::new(Cell::new(0));
        let producer = Self {
            iter: items.into_iter(),
            pulls: pulls.clone(),
        };
        (producer, pulls)
    }
}

impl<I: Iterator> Iterator for CountingProducer<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.iter.next()
    }
}
