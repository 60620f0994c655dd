/*
   Singly Linked List: an owning singly linked list with the classic
   list algorithms (in-place reverse, two-pointer middle and
   tortoise-and-hare cycle detection).

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
use crate::singly::{list::SinglyLinkedList, node::Node};
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// An iterator over the elements of the
/// [`SinglyLinkedList`](SinglyLinkedList) from head to tail.
///
/// This struct is created by the
/// [`.iter()`](SinglyLinkedList#method.iter) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// # Examples
/// ```
/// use chainlist::lists::SinglyLinkedList;
/// use chainlist::lists::singly::Iter;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// list.insert_front(1).unwrap();
/// list.insert_front(2).unwrap();
/// list.insert_front(3).unwrap();
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: *const Node<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

/// An iterator over the elements of the [`SinglyLinkedList`] with
/// mutable references that allows the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](SinglyLinkedList#method.iter_mut) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// # Examples
/// ```
/// use chainlist::lists::SinglyLinkedList;
/// use chainlist::lists::singly::IterMut;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// list.insert_back(1).unwrap();
/// list.insert_back(2).unwrap();
///
/// let iter_mut: IterMut<u8> = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
/// assert_eq!(list.to_string(), "101 -> 102");
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    cursor: *mut Node<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator that moves the elements out of the list from
/// head to tail.
///
/// This struct is created by the `into_iter()` method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a SinglyLinkedList<T>) -> Iter<'a, T> {
        Iter {
            cursor: list.head,
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> IterMut<'a, T> {
        IterMut {
            cursor: list.head,
            remaining: list.len(),
            marker: PhantomData,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SinglyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

// Both borrowing iterators stop after `len` steps, so they never walk
// past the last counted node even when the chain has been damaged.
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 || self.cursor.is_null() {
            return None;
        }
        unsafe {
            let node = &*self.cursor;
            self.cursor = node.next;
            self.remaining -= 1;
            Some(&node.val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 || self.cursor.is_null() {
            return None;
        }
        unsafe {
            let node = &mut *self.cursor;
            self.cursor = node.next;
            self.remaining -= 1;
            Some(&mut node.val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.delete_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for IterMut<'a, T> {}
impl<T> FusedIterator for IntoIter<T> {}
