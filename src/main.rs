// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pennyplan::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("calendar", sub)) => commands::calendar::handle(sub)?,
        Some(("tx", sub)) => commands::transactions::handle(sub)?,
        Some(("recurring", sub)) => commands::recurring::handle(sub)?,
        Some(("project", sub)) => commands::projection::handle(sub)?,
        Some(("draft", sub)) => commands::draft::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
