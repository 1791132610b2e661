//! Change notification for matrices that are replaced over time
//!
//! Stores themselves are immutable values; reactive consumers instead hold a
//! [`TrackedMatrix`], a mutable wrapper owning the current store plus an
//! explicit subscriber registry. Subscription hands back a typed token;
//! dropping interest is an explicit `unsubscribe(token)` call, never a
//! side effect of the value type.

use spcell_core::{Cell, CsrMatrix, MatrixElement, Result};

/// A change to the wrapped matrix, delivered to subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixEvent<T: MatrixElement> {
    /// The wrapped value was replaced wholesale
    Replaced { nnz: usize },
    /// Individual cells changed relative to the previous value
    DataChange { changes: Vec<Cell<T>> },
    /// Another matrix was embedded at an offset
    EmbeddingUpdate { position: (usize, usize) },
}

/// Token returned by [`TrackedMatrix::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionToken(u64);

type Subscriber<T> = Box<dyn FnMut(&MatrixEvent<T>)>;

/// Mutable wrapper pairing a CSR store with an observer registry
pub struct TrackedMatrix<T: MatrixElement> {
    inner: CsrMatrix<T>,
    subscribers: Vec<(SubscriptionToken, Subscriber<T>)>,
    next_token: u64,
}

impl<T: MatrixElement> TrackedMatrix<T> {
    /// Wrap a store
    pub fn new(matrix: CsrMatrix<T>) -> Self {
        Self {
            inner: matrix,
            subscribers: Vec::new(),
            next_token: 0,
        }
    }

    /// The current store
    pub fn matrix(&self) -> &CsrMatrix<T> {
        &self.inner
    }

    /// Register a subscriber; the token identifies it for unsubscription
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionToken
    where
        F: FnMut(&MatrixEvent<T>) + 'static,
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push((token, Box::new(subscriber)));
        token
    }

    /// Remove a subscriber; returns false for unknown or stale tokens
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        match self.subscribers.iter().position(|(t, _)| *t == token) {
            Some(index) => {
                drop(self.subscribers.swap_remove(index));
                true
            }
            None => false,
        }
    }

    /// Replace the wrapped store, notifying subscribers
    ///
    /// Emits `Replaced` with the new occupancy, then `DataChange` listing
    /// every cell whose stored value differs from before. Entries present
    /// only in the old value appear in the diff with a zero value.
    pub fn replace(&mut self, matrix: CsrMatrix<T>) {
        let changes = Self::diff(&self.inner, &matrix);
        self.inner = matrix;
        self.notify(&MatrixEvent::Replaced {
            nnz: self.inner.nnz(),
        });
        if !changes.is_empty() {
            self.notify(&MatrixEvent::DataChange { changes });
        }
    }

    fn diff(before: &CsrMatrix<T>, after: &CsrMatrix<T>) -> Vec<Cell<T>> {
        let mut changes: Vec<Cell<T>> = crate::traverse::non_zero_cells(after)
            .filter(|cell| before.get(cell.row, cell.col) != cell.value)
            .collect();
        for cell in crate::traverse::non_zero_cells(before) {
            if after.get(cell.row, cell.col).is_zero() {
                changes.push(cell.with_value(T::zero()));
            }
        }
        changes
    }

    /// Embed `target` into the wrapped store in place, notifying subscribers
    ///
    /// The in-place embed variant routed through the registry. The wrapped
    /// value only changes on success.
    pub fn embed_at<F>(
        &mut self,
        target: &CsrMatrix<T>,
        position: (usize, usize),
        trans_op: F,
    ) -> Result<()>
    where
        F: FnMut(T, T) -> T,
    {
        crate::compose::embed_in_place(&mut self.inner, target, position, trans_op)?;
        self.notify(&MatrixEvent::EmbeddingUpdate { position });
        Ok(())
    }

    fn notify(&mut self, event: &MatrixEvent<T>) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_replace_notifies() {
        let mut tracked = TrackedMatrix::new(CsrMatrix::<f64>::empty(2, 2));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        tracked.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let next = CsrMatrix::from_cells(2, 2, [Cell::new(0, 0, 1.0)]).unwrap();
        tracked.replace(next);

        assert_eq!(
            &*seen.borrow(),
            &[
                MatrixEvent::Replaced { nnz: 1 },
                MatrixEvent::DataChange {
                    changes: vec![Cell::new(0, 0, 1.0)],
                },
            ]
        );
    }

    #[test]
    fn test_replace_diff_reports_removed_cells_as_zero() {
        let first =
            CsrMatrix::from_cells(2, 2, [Cell::new(0, 0, 1.0), Cell::new(1, 1, 4.0)]).unwrap();
        let mut tracked = TrackedMatrix::new(first);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        tracked.subscribe(move |event| {
            if let MatrixEvent::DataChange { changes } = event {
                sink.borrow_mut().extend(changes.iter().copied());
            }
        });

        // (0,0) keeps its value, (1,1) changes, (0,1) appears.
        let next = CsrMatrix::from_cells(
            2,
            2,
            [Cell::new(0, 0, 1.0), Cell::new(0, 1, 7.0)],
        )
        .unwrap();
        tracked.replace(next);

        assert_eq!(
            &*seen.borrow(),
            &[Cell::new(0, 1, 7.0), Cell::new(1, 1, 0.0)]
        );
    }

    #[test]
    fn test_replace_with_identical_value_emits_no_data_change() {
        let m = CsrMatrix::from_cells(2, 2, [Cell::new(1, 0, 3.0)]).unwrap();
        let mut tracked = TrackedMatrix::new(m.clone());
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        tracked.subscribe(move |event| {
            if matches!(event, MatrixEvent::DataChange { .. }) {
                *sink.borrow_mut() += 1;
            }
        });

        tracked.replace(m);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut tracked = TrackedMatrix::new(CsrMatrix::<f64>::empty(2, 2));
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let token = tracked.subscribe(move |_| *sink.borrow_mut() += 1);

        tracked.replace(CsrMatrix::empty(2, 2));
        assert!(tracked.unsubscribe(token));
        tracked.replace(CsrMatrix::empty(2, 2));

        assert_eq!(*count.borrow(), 1);
        assert!(!tracked.unsubscribe(token));
    }

    #[test]
    fn test_embed_at_mutates_and_notifies() {
        let base = CsrMatrix::from_cells(3, 3, [Cell::new(1, 1, 10.0)]).unwrap();
        let mut tracked = TrackedMatrix::new(base);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        tracked.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let target = CsrMatrix::from_cells(1, 1, [Cell::new(0, 0, 5.0)]).unwrap();
        tracked.embed_at(&target, (1, 1), |a, b| a + b).unwrap();

        assert_eq!(tracked.matrix().get(1, 1), 15.0);
        assert_eq!(
            &*seen.borrow(),
            &[MatrixEvent::EmbeddingUpdate { position: (1, 1) }]
        );
    }

    #[test]
    fn test_late_subscribers_see_nothing_retroactively() {
        let mut tracked = TrackedMatrix::new(CsrMatrix::<f64>::empty(1, 1));
        tracked.replace(CsrMatrix::empty(1, 1));

        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        tracked.subscribe(move |_| *sink.borrow_mut() += 1);

        assert_eq!(*count.borrow(), 0);
    }
}
