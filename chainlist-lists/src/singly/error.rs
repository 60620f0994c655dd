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

/// The ways a list operation can fail. A failed operation never
/// leaves the list partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The global allocator could not provide memory for a new node.
    #[error("node allocation failed")]
    OutOfMemory,
    /// A positional argument lies outside the valid range for the
    /// current length of the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// The operation needs at least one element.
    #[error("list is empty")]
    Empty,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ListError::OutOfMemory.to_string(), "node allocation failed");
        assert_eq!(
            ListError::OutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 out of range for list of length 3"
        );
        assert_eq!(ListError::Empty.to_string(), "list is empty");
    }
}
