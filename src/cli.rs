// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn view_arg() -> Arg {
    Arg::new("view")
        .long("view")
        .value_name("VIEW")
        .help("overall|arecanut|paddy|household")
        .default_value("overall")
}

fn year_arg() -> Arg {
    Arg::new("year")
        .long("year")
        .value_name("YEAR")
        .help("Calendar year, or 'all'")
        .default_value("all")
}

pub fn build_cli() -> Command {
    Command::new("farmledger")
        .about("Farm and household finance tracking with analytics and income forecasting")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .value_name("KIND")
                                .help("income|expense|household"),
                        )
                        .arg(
                            Arg::new("segment")
                                .long("segment")
                                .value_name("SEGMENT")
                                .help("arecanut|paddy|household (household kind implies it)"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Required unless --quantity and --rate are given"),
                        )
                        .arg(Arg::new("quantity").long("quantity").help("Physical quantity, e.g. kg"))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .help("Unit price; with --quantity, income amount = quantity * rate"),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("year").long("year").value_name("YEAR"))
                        .arg(Arg::new("kind").long("kind").value_name("KIND"))
                        .arg(Arg::new("segment").long("segment").value_name("SEGMENT"))
                        .arg(Arg::new("category").long("category").value_name("CATEGORY"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_name("N")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Remove a transaction by id").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Analytics over the ledger")
                .subcommand(json_flags(
                    Command::new("dashboard")
                        .about("Overall metrics, per-farm summary, top spend categories")
                        .arg(year_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("monthly")
                        .about("Monthly income/expense/household buckets")
                        .arg(view_arg())
                        .arg(year_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("seasonal")
                        .about("Cross-year seasonal pattern")
                        .arg(view_arg())
                        .arg(year_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Ranked spend categories with Others collapsing")
                        .arg(view_arg())
                        .arg(year_arg())
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_name("K")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("forecast")
                        .about("Linear-trend income projection for the next 3 months")
                        .arg(view_arg())
                        .arg(year_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("yield")
                        .about("Per-farm quantity, revenue, and average rate")
                        .arg(year_arg()),
                )),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV (date,kind,segment,category,notes,amount,quantity)")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export all transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_name("FMT")
                            .help("csv|json")
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored rows for data issues"))
}
