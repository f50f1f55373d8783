// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::draft;
use crate::utils::maybe_print_json;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(sub)?,
        Some(("clear", _)) => clear()?,
        _ => {}
    }
    Ok(())
}

fn show(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    match draft::load()? {
        Some(input) => {
            if !maybe_print_json(json_flag, jsonl_flag, &input)? {
                println!("{}", serde_json::to_string_pretty(&input)?);
            }
        }
        None => println!("No draft saved."),
    }
    Ok(())
}

fn clear() -> Result<()> {
    if draft::clear()? {
        println!("Draft cleared.");
    } else {
        println!("No draft to clear.");
    }
    Ok(())
}
