//! Zero-or-one element iterators over the right value of an [`Either`](super::Either).

use std::iter::FusedIterator;

/// Owning iterator over the right value of an `Either`.
///
/// Created by [`IntoIterator::into_iter`] on an `Either`.
#[derive(Debug, Clone)]
pub struct IntoIter<R> {
    pub(super) inner: std::option::IntoIter<R>,
}

/// Borrowing iterator over the right value of an `Either`.
///
/// Created by [`Either::iter`](super::Either::iter).
#[derive(Debug)]
pub struct Iter<'a, R> {
    pub(super) inner: std::option::IntoIter<&'a R>,
}

/// Mutably borrowing iterator over the right value of an `Either`.
///
/// Created by [`Either::iter_mut`](super::Either::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, R> {
    pub(super) inner: std::option::IntoIter<&'a mut R>,
}

impl<R> Clone for Iter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

macro_rules! at_most_one_iterator {
    ($iterator:ty, $item:ty $(, $lifetime:lifetime)?) => {
        impl<$($lifetime,)? R> Iterator for $iterator {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lifetime,)? R> DoubleEndedIterator for $iterator {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($lifetime,)? R> ExactSizeIterator for $iterator {}

        impl<$($lifetime,)? R> FusedIterator for $iterator {}
    };
}

at_most_one_iterator!(IntoIter<R>, R);
at_most_one_iterator!(Iter<'a, R>, &'a R, 'a);
at_most_one_iterator!(IterMut<'a, R>, &'a mut R, 'a);
