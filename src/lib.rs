//! A singly linked list together with the classic list algorithms:
//! in-place reverse, two-pointer middle and tortoise-and-hare cycle
//! detection.

/// A singly linked list that owns its nodes, and the errors its
/// operations report.
pub mod lists {
    pub use chainlist_lists::singly::error::ListError;
    pub use chainlist_lists::singly::list::IntList;
    pub use chainlist_lists::singly::list::SinglyLinkedList;
    /// This module contains the iterators of the [`SinglyLinkedList`]
    pub mod singly {
        pub use chainlist_lists::singly::iter::IntoIter;
        pub use chainlist_lists::singly::iter::Iter;
        pub use chainlist_lists::singly::iter::IterMut;
    }
}
