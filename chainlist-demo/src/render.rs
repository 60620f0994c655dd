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

use chainlist::lists::IntList;
use std::io::{self, Write};

/// The convention used to print a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// `1 -> 2 -> 3`, or `Empty List`
    Arrow,
    /// `1 -> 2 -> 3 -> NULL`, or `NULL`
    Null,
}

/// Writes `list` to `out` in the given style, followed by a newline.
pub fn render<W: Write>(list: &IntList, style: Style, out: &mut W) -> io::Result<()> {
    match style {
        Style::Arrow => list.render(out),
        Style::Null => {
            for val in list {
                write!(out, "{} -> ", val)?;
            }
            writeln!(out, "NULL")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rendered(vals: &[isize], style: Style) -> String {
        let mut list = IntList::new();
        for v in vals {
            list.insert_back(*v).unwrap();
        }
        let mut out = Vec::new();
        render(&list, style, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_arrow() {
        assert_eq!(rendered(&[], Style::Arrow), "Empty List\n");
        assert_eq!(rendered(&[30, 20, 10], Style::Arrow), "30 -> 20 -> 10\n");
    }

    #[test]
    fn test_null() {
        assert_eq!(rendered(&[], Style::Null), "NULL\n");
        assert_eq!(rendered(&[30, 10], Style::Null), "30 -> 10 -> NULL\n");
    }
}
