/// A binary search tree over an ordered sequence of values, built once and
/// read-only afterward. Its one query answers "what is the largest value in
/// the set for which this predicate holds?", assuming the predicate is
/// monotonic over the sequence: true for every value up to some threshold,
/// false beyond it. Font-size fitting is the motivating caller: predicates
/// there are expensive (each probe wraps and measures the full text), so the
/// tree exists to keep the number of probes down.
#[derive(Debug)]
pub struct SearchTree<T> {
    value: T,
    lesser: Option<Box<SearchTree<T>>>,
    greater: Option<Box<SearchTree<T>>>,
}

impl<T: Ord> SearchTree<T> {
    /// Build a tree from a sequence ordered small-to-large. Returns [None]
    /// for an empty sequence.
    ///
    /// The root takes the final (maximum) element, so the common case where
    /// everything satisfies the predicate resolves on the first probe. The
    /// remaining prefix is inserted midpoint-first, keeping the root's
    /// `lesser` subtree balanced; the root's `greater` subtree is always
    /// empty.
    pub fn from_ordered_sequence<I>(seq: I) -> Option<SearchTree<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut seq: Vec<T> = seq.into_iter().collect();
        let root_value = seq.pop()?;
        let mut root = SearchTree::new(root_value);
        root.insert_balanced(seq);
        Some(root)
    }

    fn new(value: T) -> SearchTree<T> {
        SearchTree {
            value,
            lesser: None,
            greater: None,
        }
    }

    /// The value held at the root of this (sub)tree
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Insert `value` at the bottom of the tree, keeping the search
    /// invariant intact. Iterative so that tree depth never risks the call
    /// stack.
    fn insert(&mut self, value: T) {
        let mut node = self;
        loop {
            let side = if value < node.value {
                &mut node.lesser
            } else {
                &mut node.greater
            };
            match side {
                Some(child) => node = child.as_mut(),
                None => {
                    *side = Some(Box::new(SearchTree::new(value)));
                    return;
                }
            }
        }
    }

    /// Insert every value of an ordered sequence, midpoint of each range
    /// first, producing a balanced subtree under the existing nodes
    fn insert_balanced(&mut self, seq: Vec<T>) {
        let mut pending = vec![seq];
        while let Some(mut seq) = pending.pop() {
            if seq.is_empty() {
                continue;
            }
            let mid_idx = seq.len() / 2;
            let upper = seq.split_off(mid_idx + 1);
            if let Some(mid) = seq.pop() {
                self.insert(mid);
            }
            pending.push(seq);
            pending.push(upper);
        }
    }

    /// The largest value in the tree for which `predicate` returns true, or
    /// [None] when no value satisfies it.
    ///
    /// When the predicate holds at a node the answer is at least that
    /// node's value, so the walk continues into `greater` looking for a
    /// larger one; when it fails, any answer lies strictly in `lesser`.
    pub fn find_max<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut node = Some(self);
        let mut best = None;
        while let Some(n) = node {
            if predicate(&n.value) {
                best = Some(&n.value);
                node = n.greater.as_deref();
            } else {
                node = n.lesser.as_deref();
            }
        }
        best
    }

    /// [SearchTree::find_max] with a fallible predicate: the first error
    /// aborts the walk and is returned unchanged
    pub fn try_find_max<P, E>(&self, mut predicate: P) -> Result<Option<&T>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
    {
        let mut node = Some(self);
        let mut best = None;
        while let Some(n) = node {
            if predicate(&n.value)? {
                best = Some(&n.value);
                node = n.greater.as_deref();
            } else {
                node = n.lesser.as_deref();
            }
        }
        Ok(best)
    }

    /// Every value in the tree, smallest first
    pub fn in_order_values(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack: Vec<&SearchTree<T>> = Vec::new();
        let mut node = Some(self);
        while node.is_some() || !stack.is_empty() {
            while let Some(n) = node {
                stack.push(n);
                node = n.lesser.as_deref();
            }
            if let Some(n) = stack.pop() {
                values.push(&n.value);
                node = n.greater.as_deref();
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_an_ordered_sequence() {
        let tree = SearchTree::from_ordered_sequence(0..10).unwrap();

        assert_eq!(tree.value, 9);
        assert_eq!(tree.lesser.as_ref().unwrap().value, 4);
        assert!(tree.greater.is_none());

        let in_order: Vec<i32> = tree.in_order_values().into_iter().copied().collect();
        assert_eq!(in_order, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn an_empty_sequence_has_no_tree() {
        assert!(SearchTree::<i32>::from_ordered_sequence(std::iter::empty()).is_none());
    }

    #[test]
    fn a_single_value_is_its_own_root() {
        let tree = SearchTree::from_ordered_sequence(7..8).unwrap();
        assert_eq!(tree.value, 7);
        assert!(tree.lesser.is_none());
        assert!(tree.greater.is_none());
    }

    #[test]
    fn finds_the_max_value_satisfying_a_predicate() {
        let tree = SearchTree::from_ordered_sequence(0..10).unwrap();
        assert_eq!(tree.find_max(|&n| (n as f64) < 6.5), Some(&6));
        assert_eq!(tree.find_max(|&n| (n as f64) > 9.9), None);
        assert_eq!(tree.find_max(|&n| (n as f64) < 0.0), None);
    }

    #[test]
    fn find_max_handles_every_threshold() {
        let tree = SearchTree::from_ordered_sequence(1..=100).unwrap();
        for threshold in 1..=100 {
            assert_eq!(tree.find_max(|&n| n <= threshold), Some(&threshold));
        }
        assert_eq!(tree.find_max(|_| false), None);
        assert_eq!(tree.find_max(|_| true), Some(&100));
    }

    #[test]
    fn try_find_max_propagates_predicate_errors() {
        let tree = SearchTree::from_ordered_sequence(1..=10).unwrap();

        let found: Result<Option<&i32>, &str> = tree.try_find_max(|&n| Ok(n <= 4));
        assert_eq!(found, Ok(Some(&4)));

        let failed: Result<Option<&i32>, &str> =
            tree.try_find_max(|&n| if n == 5 { Err("boom") } else { Ok(n <= 4) });
        assert_eq!(failed, Err("boom"));
    }
}
