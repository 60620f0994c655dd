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

//! The walkthrough printed by `chainlist demo`.

use crate::error::DemoError;
use crate::render::{render, Style};
use chainlist::lists::IntList;
use std::io::Write;

/// Builds a list at both ends and in the middle, trims it, reverses
/// it and queries it.
fn walkthrough<W: Write>(style: Style, out: &mut W) -> Result<(), DemoError> {
    let mut list = IntList::new();
    list.insert_back(1)?;
    list.insert_back(2)?;
    list.insert_back(3)?;
    list.insert_front(0)?;
    list.insert_at(5, 2)?;

    write!(out, "Original list: ")?;
    render(&list, style, out)?;
    match list.search(&5) {
        Some(p) => writeln!(out, "Position of 5: {}", p)?,
        None => writeln!(out, "Position of 5: not found")?,
    }

    list.delete_front()?;
    list.delete_back()?;
    write!(out, "After deletions: ")?;
    render(&list, style, out)?;

    list.reverse();
    write!(out, "After reverse: ")?;
    render(&list, style, out)?;

    if let Some(mid) = list.middle() {
        writeln!(out, "Middle element: {}", mid)?;
    }
    writeln!(out, "Has cycle: {}", list.has_cycle())?;
    list.destroy();
    Ok(())
}

/// Pushes three values to the front and deletes one by value.
fn front_and_delete<W: Write>(style: Style, out: &mut W) -> Result<(), DemoError> {
    let mut list = IntList::new();
    list.insert_front(10)?;
    list.insert_front(20)?;
    list.insert_front(30)?;
    write!(out, "Linked List: ")?;
    render(&list, style, out)?;

    delete_and_render(&mut list, 20, style, out)
}

/// Deletes the first `val` from `list`, reporting a miss, and prints
/// what is left.
fn delete_and_render<W: Write>(
    list: &mut IntList,
    val: isize,
    style: Style,
    out: &mut W,
) -> Result<(), DemoError> {
    if list.delete_value(&val).is_none() {
        writeln!(out, "{} not found", val)?;
    }
    write!(out, "After Deletion: ")?;
    render(list, style, out)?;
    Ok(())
}

/// Shows how every operation reports an empty list.
fn empty<W: Write>(style: Style, out: &mut W) -> Result<(), DemoError> {
    let mut list = IntList::new();
    write!(out, "Fresh list: ")?;
    render(&list, style, out)?;
    for (name, result) in [
        ("delete_front", list.delete_front()),
        ("delete_back", list.delete_back()),
        ("delete_at(0)", list.delete_at(0)),
    ] {
        if let Err(e) = result {
            writeln!(out, "{}: {}", name, e)?;
        }
    }
    writeln!(out, "middle: {:?}", list.middle())?;
    writeln!(out, "search(42): {:?}", list.search(&42))?;
    Ok(())
}

/// Runs every walkthrough in order, separated by blank lines.
pub fn run_all<W: Write>(style: Style, out: &mut W) -> Result<(), DemoError> {
    log::info!("running the walkthrough with the {:?} style", style);
    walkthrough(style, out)?;
    writeln!(out)?;
    front_and_delete(style, out)?;
    writeln!(out)?;
    empty(style, out)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_run_all_arrow() {
        let mut out = Vec::new();
        run_all(Style::Arrow, &mut out).unwrap();
        let expected = "\
Original list: 0 -> 1 -> 5 -> 2 -> 3
Position of 5: 2
After deletions: 1 -> 5 -> 2
After reverse: 2 -> 5 -> 1
Middle element: 5
Has cycle: false

Linked List: 30 -> 20 -> 10
After Deletion: 30 -> 10

Fresh list: Empty List
delete_front: list is empty
delete_back: list is empty
delete_at(0): list is empty
middle: None
search(42): None
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_delete_missing_value_is_reported() {
        let mut list = IntList::new();
        list.insert_front(10).unwrap();
        let mut out = Vec::new();
        delete_and_render(&mut list, 20, Style::Arrow, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "20 not found\nAfter Deletion: 10\n"
        );
    }

    #[test]
    fn test_null_style() {
        let mut out = Vec::new();
        front_and_delete(Style::Null, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Linked List: 30 -> 20 -> 10 -> NULL\nAfter Deletion: 30 -> 10 -> NULL\n"
        );
    }
}
