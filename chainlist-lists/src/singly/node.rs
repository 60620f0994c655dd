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

use core::ptr;

/// A single cell of the chain. The successor link is null at the
/// end of the chain and is only ever rewritten by the list.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Node<T> {
    pub(super) val: T,
    pub(super) next: *mut Node<T>,
}

impl<T> Node<T> {
    pub(super) fn new(val: T) -> Node<T> {
        Node {
            val,
            next: ptr::null_mut(),
        }
    }
}
