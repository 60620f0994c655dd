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

use chainlist::lists::ListError;
use std::io;

/// Errors that stop the demo program.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("list operation failed: {0}")]
    List(#[from] ListError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A line of REPL input that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{cmd}` takes {expected} argument(s)")]
    Arity { cmd: String, expected: usize },
    #[error("`{0}` is not a valid number")]
    Number(String),
}
