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

//! A singly linked list that owns its nodes. Elements can be
//! inserted and removed at the front in constant time and at any
//! position in linear time.
//!
//! Besides the usual container operations the list carries the
//! classic list algorithms: reversing the chain in place, finding
//! the middle element with two pointers and detecting a cycle with
//! the tortoise-and-hare traversal.
//!
//! Node memory comes straight from the global allocator. An
//! allocation failure is reported as
//! [`ListError::OutOfMemory`](error::ListError::OutOfMemory) and
//! leaves the list untouched.
mod alloc;
pub mod error;
pub mod iter;
pub mod list;
mod node;
