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
use crate::singly::{error::ListError, node::Node};
use core::ptr;
use std::alloc::{alloc, dealloc, Layout};

/// Allocates a node cell and moves `val` into it. The returned node
/// is unlinked. If the allocator returns null then `val` is dropped
/// and `ListError::OutOfMemory` is returned instead of aborting.
pub(super) fn acquire<T>(val: T) -> Result<*mut Node<T>, ListError> {
    // Node<T> always holds a pointer so the layout is never zero sized.
    let layout = Layout::new::<Node<T>>();
    unsafe {
        let ptr = alloc(layout) as *mut Node<T>;
        if ptr.is_null() {
            return Err(ListError::OutOfMemory);
        }
        ptr::write(ptr, Node::new(val));
        Ok(ptr)
    }
}

/// Moves the value out of the node and returns the cell to the
/// allocator.
///
/// # Safety
///
/// `ptr` must have come from [`acquire`], must already be unlinked
/// from every chain and must not be used again.
pub(super) unsafe fn release<T>(ptr: *mut Node<T>) -> T {
    let node = ptr::read(ptr);
    dealloc(ptr as *mut u8, Layout::new::<Node<T>>());
    node.val
}
