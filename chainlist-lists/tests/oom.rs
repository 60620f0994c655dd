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

use chainlist::lists::{IntList, ListError};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    // Per thread so the test harness threads keep allocating normally.
    static FAIL_ALLOC: Cell<bool> = const { Cell::new(false) };
}

struct FailingAlloc;

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_ALLOC.try_with(|f| f.get()).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: FailingAlloc = FailingAlloc;

fn with_failing_alloc<R>(f: impl FnOnce() -> R) -> R {
    FAIL_ALLOC.with(|flag| flag.set(true));
    let r = f();
    FAIL_ALLOC.with(|flag| flag.set(false));
    r
}

#[test]
fn test_insert_out_of_memory_leaves_list_unchanged() {
    let mut ll = IntList::new();
    for v in 1..=3 {
        ll.insert_back(v).unwrap();
    }

    let (front, back, at, past_end) = with_failing_alloc(|| {
        (
            ll.insert_front(0),
            ll.insert_back(4),
            ll.insert_at(9, 1),
            ll.insert_at(9, 9),
        )
    });

    assert_eq!(front, Err(ListError::OutOfMemory));
    assert_eq!(back, Err(ListError::OutOfMemory));
    assert_eq!(at, Err(ListError::OutOfMemory));
    // the range is checked before anything is allocated
    assert_eq!(past_end, Err(ListError::OutOfRange { index: 9, len: 3 }));

    assert_eq!(ll.len(), 3);
    assert_eq!(ll.to_string(), "1 -> 2 -> 3");
    assert!(!ll.has_cycle());

    // the list keeps working once memory is available again
    ll.insert_at(9, 1).unwrap();
    assert_eq!(ll.to_string(), "1 -> 9 -> 2 -> 3");
}

#[test]
fn test_insert_out_of_memory_on_empty_list() {
    let mut ll = IntList::new();
    let (front, back, at) =
        with_failing_alloc(|| (ll.insert_front(1), ll.insert_back(1), ll.insert_at(1, 0)));

    assert_eq!(front, Err(ListError::OutOfMemory));
    assert_eq!(back, Err(ListError::OutOfMemory));
    assert_eq!(at, Err(ListError::OutOfMemory));
    assert!(ll.is_empty());
    assert_eq!(ll.len(), 0);
    assert_eq!(ll.to_string(), "Empty List");
}
