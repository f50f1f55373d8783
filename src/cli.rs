// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print results as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print results as JSON lines"),
    )
}

fn file_arg() -> Arg {
    Arg::new("file")
        .long("file")
        .value_name("PATH")
        .help("Read the snapshot from a local JSON file instead of the API")
}

pub fn build_cli() -> Command {
    Command::new("pennyplan")
        .version(crate_version!())
        .about("Recurring-transaction projection, calendar budgeting, and savings planning")
        .subcommand(
            json_flags(
                Command::new("calendar")
                    .about("Week or month calendar of transactions with per-day nets")
                    .arg(
                        Arg::new("mode")
                            .long("mode")
                            .value_name("week|month")
                            .default_value("week"),
                    )
                    .arg(
                        Arg::new("anchor")
                            .long("anchor")
                            .value_name("YYYY-MM-DD")
                            .help("Any date inside the week/month to show (default: today)"),
                    )
                    .arg(file_arg()),
            ),
        )
        .subcommand(
            Command::new("tx")
                .about("Inspect the transaction window")
                .subcommand(
                    json_flags(
                        Command::new("list")
                            .about("Classified view: recurring parents, singles, orphans")
                            .arg(
                                Arg::new("from")
                                    .long("from")
                                    .value_name("YYYY-MM-DD")
                                    .help("Window start (default: 30 days back)"),
                            )
                            .arg(
                                Arg::new("to")
                                    .long("to")
                                    .value_name("YYYY-MM-DD")
                                    .help("Window end (default: today)"),
                            )
                            .arg(file_arg()),
                    ),
                )
                .subcommand(
                    json_flags(
                        Command::new("upcoming")
                            .about("Next scheduled transactions on or after a date")
                            .arg(
                                Arg::new("from")
                                    .long("from")
                                    .value_name("YYYY-MM-DD")
                                    .help("Start of the lookahead (default: today)"),
                            )
                            .arg(
                                Arg::new("limit")
                                    .long("limit")
                                    .value_parser(clap::value_parser!(usize))
                                    .default_value("10"),
                            )
                            .arg(file_arg()),
                    ),
                ),
        )
        .subcommand(
            Command::new("recurring").about("Work with recurrence rules").subcommand(
                json_flags(
                    Command::new("preview")
                        .about("Expand a rule into its occurrence dates before submitting it")
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_name("weekly|monthly|yearly")
                                .required(true),
                        )
                        .arg(Arg::new("week-day").long("week-day").value_name("DAY"))
                        .arg(
                            Arg::new("month-day")
                                .long("month-day")
                                .value_name("1-31")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("year-month")
                                .long("year-month")
                                .value_name("1-12")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("year-day")
                                .long("year-day")
                                .value_name("1-31")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("anchor")
                                .long("anchor")
                                .value_name("YYYY-MM-DD")
                                .required(true)
                                .help("Rule anchor/creation date"),
                        )
                        .arg(Arg::new("end-date").long("end-date").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("from")
                                .long("from")
                                .value_name("YYYY-MM-DD")
                                .required(true),
                        )
                        .arg(
                            Arg::new("to")
                                .long("to")
                                .value_name("YYYY-MM-DD")
                                .required(true),
                        ),
                ),
            ),
        )
        .subcommand(
            Command::new("project")
                .about("Savings projections over a timeframe")
                .subcommand(
                    json_flags(
                        Command::new("calculate")
                            .about("Aggregate expenses and compute the per-interval contribution")
                            .arg(
                                Arg::new("goal")
                                    .long("goal")
                                    .value_name("AMOUNT")
                                    .help("Savings goal for the period"),
                            )
                            .arg(
                                Arg::new("months")
                                    .long("months")
                                    .value_name("N")
                                    .value_parser(clap::value_parser!(u32)),
                            )
                            .arg(
                                Arg::new("frequency")
                                    .long("frequency")
                                    .value_name("weekly|biweekly|monthly"),
                            )
                            .arg(
                                Arg::new("start")
                                    .long("start")
                                    .value_name("YYYY-MM-DD")
                                    .help("Projection start date (default: today)"),
                            )
                            .arg(
                                Arg::new("expense")
                                    .long("expense")
                                    .value_name("DESC=AMOUNT")
                                    .action(ArgAction::Append)
                                    .help("Ad hoc monthly expense; repeatable"),
                            )
                            .arg(
                                Arg::new("category-goal")
                                    .long("category-goal")
                                    .value_name("ID")
                                    .value_parser(clap::value_parser!(i64))
                                    .action(ArgAction::Append)
                                    .help("Include a category budget goal; repeatable"),
                            )
                            .arg(
                                Arg::new("annual-goal")
                                    .long("annual-goal")
                                    .value_name("ID")
                                    .value_parser(clap::value_parser!(i64))
                                    .help("Include one annual goal, prorated to the timeframe"),
                            )
                            .arg(
                                Arg::new("recurring")
                                    .long("recurring")
                                    .value_name("ID")
                                    .value_parser(clap::value_parser!(i64))
                                    .action(ArgAction::Append)
                                    .help("Include a recurring transaction; repeatable"),
                            )
                            .arg(
                                Arg::new("from-draft")
                                    .long("from-draft")
                                    .action(ArgAction::SetTrue)
                                    .help("Start from the saved draft; flags override it"),
                            )
                            .arg(
                                Arg::new("save-draft")
                                    .long("save-draft")
                                    .action(ArgAction::SetTrue)
                                    .help("Save these inputs as the draft"),
                            )
                            .arg(file_arg()),
                    ),
                ),
        )
        .subcommand(
            Command::new("draft")
                .about("Manage the saved projection draft")
                .subcommand(json_flags(Command::new("show").about("Print the saved draft")))
                .subcommand(Command::new("clear").about("Delete the saved draft")),
        )
}
