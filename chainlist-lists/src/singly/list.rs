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

use crate::singly::{
    alloc, error::ListError, iter::IntoIter, iter::Iter, iter::IterMut, node::Node,
};
use core::fmt;
use core::marker::PhantomData;
use core::ptr;
use std::io;

/// A singly linked list that owns its nodes. Elements can be
/// inserted and removed at the front in constant time and at any
/// position in linear time.
///
/// Every operation that can fail returns a [`ListError`] and leaves
/// the list exactly as it was. Nodes are allocated from the global
/// allocator and an allocation failure is reported as
/// [`ListError::OutOfMemory`] rather than aborting the process.
///
/// # Getting Started
///
/// To get started add the chainlist dependency to Cargo.toml and the
/// use declaration in your source.
///
/// ```text
/// [dependencies]
/// chainlist = "0.1.0"
/// ```
///
/// ```
/// use chainlist::lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::<isize>::new();
/// list.insert_back(1).unwrap();
/// list.insert_back(2).unwrap();
/// list.insert_back(3).unwrap();
/// list.insert_front(0).unwrap();
/// list.insert_at(5, 2).unwrap();
///
/// assert_eq!(list.to_string(), "0 -> 1 -> 5 -> 2 -> 3");
/// assert_eq!(list.search(&5), Some(2));
/// assert_eq!(list.len(), 5);
/// ```
pub struct SinglyLinkedList<T> {
    pub(super) head: *mut Node<T>,
    pub(super) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

/// A list of word sized signed integers.
pub type IntList = SinglyLinkedList<isize>;

unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the values joined by `" -> "`. An empty list is formatted
/// as `Empty List`.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head.is_null() {
            return f.write_str("Empty List");
        }
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", val)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty linked list. No memory is allocated until
    /// the first element is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let list = SinglyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: ptr::null_mut(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns an iterator over the list from head to tail.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_front(1).unwrap();
    /// list.insert_front(2).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the list with mutable references
    /// that allows the values to be modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns the number of elements in the list.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Removes and drops all the elements from this list, releasing
    /// every node from head to tail. The list remains usable.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_front(1).unwrap();
    /// list.insert_front(2).unwrap();
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.to_string(), "Empty List");
    /// ```
    pub fn clear(&mut self) {
        let count = self.len;
        let mut cur = self.head;
        self.head = ptr::null_mut();
        self.len = 0;

        // Walk at most `count` nodes, capturing the successor before
        // releasing the current one.
        let mut released = 0;
        while released < count && !cur.is_null() {
            unsafe {
                let next = (*cur).next;
                drop(alloc::release(cur));
                cur = next;
            }
            released += 1;
        }
        if released > 0 {
            log::trace!("released {} nodes", released);
        }
    }

    /// Tears the list down, releasing every node. This is the same as
    /// dropping the list and exists for callers that want teardown to
    /// read as an explicit step.
    pub fn destroy(self) {
        drop(self);
    }

    /// Returns a reference to the first element or `None` if the list
    /// is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.insert_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            return None;
        }
        unsafe { Some(&(*self.head).val) }
    }

    /// Returns a mutable reference to the first element or `None` if
    /// the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head.is_null() {
            return None;
        }
        unsafe { Some(&mut (*self.head).val) }
    }

    /// Returns a reference to the last element or `None` if the list
    /// is empty. The list keeps no tail link so this walks the chain.
    ///
    /// This method should complete in *O*(*n*) time.
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Returns a reference to the element at the 0-based `index` or
    /// `None` if the index is out of range.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_back(7).unwrap();
    /// list.insert_back(8).unwrap();
    /// assert_eq!(list.get(1), Some(&8));
    /// assert_eq!(list.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&(*self.ptr_at(index)).val) }
    }

    /// Returns a mutable reference to the element at the 0-based
    /// `index` or `None` if the index is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&mut (*self.ptr_at(index)).val) }
    }

    /// Inserts `elem` at the front of the list.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfMemory`] if the node could not be
    /// allocated. The list is unchanged.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_front(10).unwrap();
    /// list.insert_front(20).unwrap();
    /// list.insert_front(30).unwrap();
    /// assert_eq!(list.to_string(), "30 -> 20 -> 10");
    /// ```
    pub fn insert_front(&mut self, elem: T) -> Result<(), ListError> {
        let n_ptr = alloc::acquire(elem)?;
        unsafe {
            (*n_ptr).next = self.head;
        }
        self.head = n_ptr;
        self.len += 1;
        Ok(())
    }

    /// Appends `elem` after the last element of the list. On an empty
    /// list this is the same as [`insert_front`](#method.insert_front).
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfMemory`] if the node could not be
    /// allocated. The list is unchanged.
    pub fn insert_back(&mut self, elem: T) -> Result<(), ListError> {
        if self.head.is_null() {
            return self.insert_front(elem);
        }
        let n_ptr = alloc::acquire(elem)?;
        unsafe {
            let tail = self.ptr_at(self.len - 1);
            (*tail).next = n_ptr;
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `elem` so that it ends up at the 0-based `index`. Valid
    /// indices are `0..=len`; inserting at `len` appends.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `index > len` and
    /// [`ListError::OutOfMemory`] if the node could not be
    /// allocated. In both cases the list is unchanged.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::{ListError, SinglyLinkedList};
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_at(1, 0).unwrap();
    /// list.insert_at(3, 1).unwrap();
    /// list.insert_at(2, 1).unwrap();
    /// assert_eq!(list.to_string(), "1 -> 2 -> 3");
    ///
    /// assert_eq!(list.insert_at(9, 4), Err(ListError::OutOfRange { index: 4, len: 3 }));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert_at(&mut self, elem: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.insert_front(elem);
        }

        let n_ptr = alloc::acquire(elem)?;
        unsafe {
            let prev = self.ptr_at(index - 1);
            (*n_ptr).next = (*prev).next;
            (*prev).next = n_ptr;
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::{ListError, SinglyLinkedList};
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.delete_front(), Err(ListError::Empty));
    ///
    /// list.insert_front(1).unwrap();
    /// assert_eq!(list.delete_front(), Ok(1));
    /// assert!(list.is_empty());
    /// ```
    pub fn delete_front(&mut self) -> Result<T, ListError> {
        if self.head.is_null() {
            return Err(ListError::Empty);
        }
        unsafe {
            let h_ptr = self.head;
            self.head = (*h_ptr).next;
            self.len -= 1;
            Ok(alloc::release(h_ptr))
        }
    }

    /// Removes the last element and returns it. Removing the only
    /// element leaves the list empty.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty.
    pub fn delete_back(&mut self) -> Result<T, ListError> {
        if self.head.is_null() {
            return Err(ListError::Empty);
        }
        unsafe {
            if (*self.head).next.is_null() {
                let h_ptr = self.head;
                self.head = ptr::null_mut();
                self.len -= 1;
                return Ok(alloc::release(h_ptr));
            }

            let prev = self.ptr_at(self.len - 2);
            let t_ptr = (*prev).next;
            (*prev).next = ptr::null_mut();
            self.len -= 1;
            Ok(alloc::release(t_ptr))
        }
    }

    /// Removes the element at the 0-based `index` and returns
    /// it. Valid indices are `0..len`.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list is empty and
    /// [`ListError::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::{ListError, SinglyLinkedList};
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_back(1).unwrap();
    /// list.insert_back(2).unwrap();
    /// list.insert_back(3).unwrap();
    ///
    /// assert_eq!(list.delete_at(1), Ok(2));
    /// assert_eq!(list.delete_at(2), Err(ListError::OutOfRange { index: 2, len: 2 }));
    /// assert_eq!(list.to_string(), "1 -> 3");
    /// ```
    pub fn delete_at(&mut self, index: usize) -> Result<T, ListError> {
        if self.head.is_null() {
            return Err(ListError::Empty);
        }
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.delete_front();
        }

        unsafe {
            let prev = self.ptr_at(index - 1);
            let n_ptr = (*prev).next;
            (*prev).next = (*n_ptr).next;
            self.len -= 1;
            Ok(alloc::release(n_ptr))
        }
    }

    /// Reverses the list in place. The former tail becomes the head
    /// and the length is unchanged. No memory is allocated.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_back(1).unwrap();
    /// list.insert_back(5).unwrap();
    /// list.insert_back(2).unwrap();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "2 -> 5 -> 1");
    /// ```
    pub fn reverse(&mut self) {
        let mut prev: *mut Node<T> = ptr::null_mut();
        let mut cur = self.head;
        unsafe {
            while !cur.is_null() {
                let next = (*cur).next;
                (*cur).next = prev;
                prev = cur;
                cur = next;
            }
        }
        self.head = prev;
        log::trace!("reversed {} nodes", self.len);
    }

    /// Returns the element at index `len / 2` (rounded down) or `None`
    /// if the list is empty. For an even length this is the upper of
    /// the two middle elements.
    ///
    /// The list is walked once with two cursors: the slow one
    /// advances one node per step and the fast one two nodes, and
    /// the walk stops when the fast cursor cannot advance two more.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.middle(), None);
    ///
    /// for i in 0..4 {
    ///     list.insert_back(i).unwrap();
    /// }
    /// assert_eq!(list.middle(), Some(&2));
    /// ```
    pub fn middle(&self) -> Option<&T> {
        if self.head.is_null() {
            return None;
        }
        let mut slow = self.head;
        let mut fast = self.head;
        unsafe {
            while !fast.is_null() && !(*fast).next.is_null() {
                slow = (*slow).next;
                fast = (*(*fast).next).next;
            }
            Some(&(*slow).val)
        }
    }

    /// Returns `true` if following the successor links from the head
    /// ever comes back to a node already visited.
    ///
    /// A list built only through the public methods never has a
    /// cycle. This check uses the tortoise-and-hare walk so it stays
    /// sound on a damaged chain: it terminates in *O*(*n*) time and
    /// never follows a null link.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert!(!list.has_cycle());
    /// list.insert_back(1).unwrap();
    /// list.insert_back(2).unwrap();
    /// assert!(!list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        if self.head.is_null() {
            return false;
        }
        let mut slow = self.head;
        let mut fast = self.head;
        unsafe {
            while !fast.is_null() && !(*fast).next.is_null() {
                slow = (*slow).next;
                fast = (*(*fast).next).next;
                if slow == fast {
                    return true;
                }
            }
        }
        false
    }

    ////////////////////
    //Private Helpers
    ////////////////////

    /// Returns the raw pointer to the node at `index` by walking from
    /// the head. The caller must ensure that `index < len`.
    unsafe fn ptr_at(&self, index: usize) -> *mut Node<T> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = (*cur).next;
        }
        cur
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the 0-based index of the first element equal to `elem`
    /// or `None` if there is no such element.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_back(4).unwrap();
    /// list.insert_back(2).unwrap();
    /// list.insert_back(4).unwrap();
    /// assert_eq!(list.search(&4), Some(0));
    /// assert_eq!(list.search(&2), Some(1));
    /// assert_eq!(list.search(&42), None);
    /// ```
    pub fn search(&self, elem: &T) -> Option<usize> {
        self.iter().position(|val| val == elem)
    }

    /// Returns `true` if the list contains an element equal to `elem`.
    pub fn contains(&self, elem: &T) -> bool {
        self.search(elem).is_some()
    }

    /// Removes the first element equal to `elem` and returns the index
    /// it was at, or `None` if the list holds no such element.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.insert_front(10).unwrap();
    /// list.insert_front(20).unwrap();
    /// list.insert_front(30).unwrap();
    ///
    /// assert_eq!(list.delete_value(&20), Some(1));
    /// assert_eq!(list.delete_value(&20), None);
    /// assert_eq!(list.to_string(), "30 -> 10");
    /// ```
    pub fn delete_value(&mut self, elem: &T) -> Option<usize> {
        let index = self.search(elem)?;
        self.delete_at(index).ok().map(|_| index)
    }
}

impl<T: fmt::Display> SinglyLinkedList<T> {
    /// Writes the list to `sink` as the values joined by `" -> "`
    /// followed by a newline. An empty list is written as
    /// `Empty List` followed by a newline.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<i32>::new();
    /// let mut out = Vec::new();
    /// list.render(&mut out).unwrap();
    /// assert_eq!(out, b"Empty List\n");
    ///
    /// list.insert_back(-1).unwrap();
    /// list.insert_back(2).unwrap();
    /// let mut out = Vec::new();
    /// list.render(&mut out).unwrap();
    /// assert_eq!(out, b"-1 -> 2\n");
    /// ```
    pub fn render<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{}", self)
    }
}
