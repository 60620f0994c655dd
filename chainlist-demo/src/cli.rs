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

use crate::render::Style;
use clap::{Parser, Subcommand};

/// Options parsed from the command line.
#[derive(Parser, Debug)]
#[command(name = "chainlist", version, about = "Exercise a singly linked list from the console")]
pub struct Cli {
    /// How lists are printed: `arrow` prints `1 -> 2`, `null` prints `1 -> 2 -> NULL`
    #[arg(short, long, value_enum, default_value_t = Style::Arrow)]
    pub style: Style,
    /// Log every structural change at trace level (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run the walkthrough of every list operation (default)
    Demo,
    /// Read list commands from stdin, one per line
    Repl,
}
