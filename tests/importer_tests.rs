// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use farmledger::{cli, commands::importer, db};
use rusqlite::Connection;
use std::io::Write;
use tempfile::NamedTempFile;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_import(conn: &mut Connection, path: &str) {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["farmledger", "import", "transactions", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(conn, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn importer_stores_canonical_values() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,kind,segment,category,notes,amount,quantity\n\
         2025-02-03,Income,ARECANUT,Harvest,first lot,4500,90\n\
         \"Date(2025,0,15)\",expense,paddy,Seeds,,300,0"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap());

    let rows: Vec<(String, String, String, String)> = {
        let mut stmt = conn
            .prepare("SELECT date, kind, segment, amount FROM transactions ORDER BY id")
            .unwrap();
        let iter = stmt
            .query_map([], |r| {
                Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?))
            })
            .unwrap();
        iter.map(|r| r.unwrap()).collect()
    };
    assert_eq!(rows.len(), 2);
    // Enums lowercased, constructor-style date normalized to ISO.
    assert_eq!(rows[0], ("2025-02-03".into(), "income".into(), "arecanut".into(), "4500".into()));
    assert_eq!(rows[1].0, "2025-01-15");
    assert_eq!(rows[1].1, "expense");
}

#[test]
fn importer_skips_unreadable_rows_without_aborting() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,kind,segment,category,notes,amount,quantity\n\
         2025-02-03,income,arecanut,Harvest,,1000,0\n\
         not-a-date,income,arecanut,Harvest,,9999,0\n\
         2025-02-04,transfer,arecanut,Harvest,,9999,0\n\
         2025-02-05,expense,paddy,Seeds,,40,0"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn importer_trims_cli_path_argument() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,kind,segment,category,notes,amount,quantity\n2025-02-03,expense,paddy,Seeds,,5,0"
    )
    .unwrap();
    file.flush().unwrap();

    let padded = format!("  {}  ", file.path().to_str().unwrap());
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["farmledger", "import", "transactions", "--path", &padded]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&mut conn, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn importer_defaults_blank_category_and_amount() {
    let mut conn = base_conn();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,kind,segment,category,notes,amount,quantity\n2025-02-03,expense,paddy,,,oops,"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap());

    let (category, amount): (String, String) = conn
        .query_row(
            "SELECT category, amount FROM transactions ORDER BY id DESC LIMIT 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(category, "General");
    assert_eq!(amount, "0");
}
