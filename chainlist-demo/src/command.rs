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

//! The line oriented command language of the REPL.

use crate::error::ParseError;
use crate::render::{render, Style};
use chainlist::lists::IntList;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
commands:
  front V      insert V at the front
  back V       insert V at the back
  at V P       insert V at index P
  del-front    delete the first element
  del-back     delete the last element
  del-at P     delete the element at index P
  del V        delete the first element equal to V
  search V     print the index of the first V
  middle       print the middle element
  reverse      reverse the list in place
  cycle        print whether the list has a cycle
  len          print the number of elements
  print        print the list
  clear        remove every element
  help         print this message
  quit         leave the repl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Front(isize),
    Back(isize),
    At(isize, usize),
    DelFront,
    DelBack,
    DelAt(usize),
    Del(isize),
    Search(isize),
    Middle,
    Reverse,
    Cycle,
    Len,
    Print,
    Clear,
    Help,
    Quit,
}

fn number<N: FromStr>(arg: &str) -> Result<N, ParseError> {
    arg.parse().map_err(|_| ParseError::Number(arg.to_string()))
}

fn arity(cmd: &str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() != expected {
        return Err(ParseError::Arity {
            cmd: cmd.to_string(),
            expected,
        });
    }
    Ok(())
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Command, ParseError> {
        let mut words = line.split_whitespace();
        let cmd = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        let expected = match cmd {
            "front" | "back" | "del-at" | "del" | "search" => 1,
            "at" => 2,
            "del-front" | "del-back" | "middle" | "reverse" | "cycle" | "len" | "print"
            | "clear" | "help" | "quit" => 0,
            _ => return Err(ParseError::Unknown(cmd.to_string())),
        };
        arity(cmd, &args, expected)?;

        Ok(match cmd {
            "front" => Command::Front(number(args[0])?),
            "back" => Command::Back(number(args[0])?),
            "at" => Command::At(number(args[0])?, number(args[1])?),
            "del-front" => Command::DelFront,
            "del-back" => Command::DelBack,
            "del-at" => Command::DelAt(number(args[0])?),
            "del" => Command::Del(number(args[0])?),
            "search" => Command::Search(number(args[0])?),
            "middle" => Command::Middle,
            "reverse" => Command::Reverse,
            "cycle" => Command::Cycle,
            "len" => Command::Len,
            "print" => Command::Print,
            "clear" => Command::Clear,
            "help" => Command::Help,
            _ => Command::Quit,
        })
    }
}

/// Applies `cmd` to `list` and writes its outcome to `out`. A failed
/// list operation is reported on `out` and the list is left as it
/// was. Returns `false` once the command asks the REPL to stop.
pub fn execute<W: Write>(
    list: &mut IntList,
    cmd: Command,
    style: Style,
    out: &mut W,
) -> io::Result<bool> {
    log::debug!("executing {:?}", cmd);
    let outcome = match cmd {
        Command::Front(v) => list.insert_front(v),
        Command::Back(v) => list.insert_back(v),
        Command::At(v, p) => list.insert_at(v, p),
        Command::DelFront => list.delete_front().map(|_| ()),
        Command::DelBack => list.delete_back().map(|_| ()),
        Command::DelAt(p) => list.delete_at(p).map(|_| ()),
        Command::Del(v) => {
            match list.delete_value(&v) {
                Some(p) => writeln!(out, "deleted {} at {}", v, p)?,
                None => writeln!(out, "{} not found", v)?,
            }
            Ok(())
        }
        Command::Search(v) => {
            match list.search(&v) {
                Some(p) => writeln!(out, "{}", p)?,
                None => writeln!(out, "not found")?,
            }
            Ok(())
        }
        Command::Middle => {
            match list.middle() {
                Some(v) => writeln!(out, "{}", v)?,
                None => writeln!(out, "no middle: list is empty")?,
            }
            Ok(())
        }
        Command::Reverse => {
            list.reverse();
            Ok(())
        }
        Command::Cycle => {
            writeln!(out, "{}", list.has_cycle())?;
            Ok(())
        }
        Command::Len => {
            writeln!(out, "{}", list.len())?;
            Ok(())
        }
        Command::Print => {
            render(list, style, out)?;
            Ok(())
        }
        Command::Clear => {
            list.clear();
            Ok(())
        }
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            Ok(())
        }
        Command::Quit => return Ok(false),
    };

    if let Err(e) = outcome {
        writeln!(out, "error: {}", e)?;
    }
    Ok(true)
}

/// Reads commands from `input` until `quit` or end of input. Blank
/// lines and lines starting with `#` are skipped.
pub fn repl<R: BufRead, W: Write>(input: R, out: &mut W, style: Style) -> io::Result<()> {
    let mut list = IntList::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<Command>() {
            Ok(cmd) => {
                if !execute(&mut list, cmd, style, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }
    log::debug!("repl finished with {} elements", list.len());
    Ok(())
}
