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

mod cli;
mod command;
mod error;
mod render;
mod scenario;

use clap::Parser;
use cli::{Cli, Mode};
use error::DemoError;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    use env_logger::Env;
    let default_filter = if cli.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => scenario::run_all(cli.style, &mut out),
        Mode::Repl => {
            let stdin = io::stdin();
            command::repl(stdin.lock(), &mut out, cli.style)?;
            Ok(())
        }
    }
}
