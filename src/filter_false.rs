use std::fmt;

/// Yields only the items for which the predicate returns `false`.
pub struct FilterFalse<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for FilterFalse<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFalse").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

#[test]
fn filter_false() {
    assert_eq!(
        FilterFalse::new(1..10, |x| x % 3 == 0).collect::<Vec<_>>(),
        vec![1, 2, 4, 5, 7, 8]
    );
    assert_eq!(
        FilterFalse::new(1..4, |_| true).collect::<Vec<_>>(),
        Vec::<i32>::new()
    );
}

#[test]
fn filter_false_debug_omits_predicate() {
    let filtered = FilterFalse::new(1..3, |x: &i32| *x > 1);
    assert_eq!(format!("{:?}", filtered), "FilterFalse { iter: 1..3 }");
}
