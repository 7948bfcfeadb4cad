use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::{mb, setup_data_dir};

fn ledger_path(data: &str) -> PathBuf {
    Path::new(data).join("daily_meal_booking.csv")
}

#[test]
fn test_legacy_date_header_is_upgraded_on_disk() {
    let data = setup_data_dir("legacy_header");
    fs::write(
        ledger_path(&data),
        "date,student_id,meal,status,timestamp\n\
         2024-03-01,H007,breakfast,booked,2024-03-01 09:10:00\n",
    )
    .unwrap();

    // Any read migrates the file to the canonical layout.
    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("H007"))
        .stdout(contains("2024-03-02"));

    let content = fs::read_to_string(ledger_path(&data)).unwrap();
    assert!(content.starts_with("booking_date,meal_date,student_id,meal,status,timestamp"));
    assert!(content.contains("2024-03-01,2024-03-02,H007,breakfast,booked,2024-03-01 09:10:00"));

    // A second read is a no-op on the bytes.
    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(ledger_path(&data)).unwrap(), content);
}

#[test]
fn test_headerless_rows_are_upgraded_on_disk() {
    let data = setup_data_dir("headerless_rows");
    fs::write(
        ledger_path(&data),
        "2024-03-01,H010,dinner,booked,2024-03-01 13:05:00\n",
    )
    .unwrap();

    mb().args([
        "--data",
        &data,
        "status",
        "--id",
        "H010",
        "--meal",
        "dinner",
        "--date",
        "2024-03-01",
    ])
    .assert()
    .success()
    .stdout(contains("dinner"))
    .stdout(contains("booked"));

    let content = fs::read_to_string(ledger_path(&data)).unwrap();
    assert!(content.starts_with("booking_date,meal_date,student_id,meal,status,timestamp"));
    assert!(content.contains("2024-03-01,2024-03-02,H010,dinner,booked"));
}

#[test]
fn test_mixed_date_formats_are_canonicalized() {
    let data = setup_data_dir("mixed_dates");
    fs::write(
        ledger_path(&data),
        "booking_date,meal_date,student_id,meal,status,timestamp\n\
         2024/03/01,NaT,H001,lunch,booked,2024-03-01 07:30:00\n",
    )
    .unwrap();

    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("H001"));

    let content = fs::read_to_string(ledger_path(&data)).unwrap();
    assert!(content.contains("2024-03-01,2024-03-02,H001,lunch,booked"));
}

#[test]
fn test_corrupt_ledger_reads_empty_and_survives() {
    let data = setup_data_dir("corrupt_ledger");
    let garbage: &[u8] = b"\x00\xff\xfe not a csv \x00";
    fs::write(ledger_path(&data), garbage).unwrap();

    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("No events recorded."));

    // Fail-soft: the unreadable file was not clobbered.
    assert_eq!(fs::read(ledger_path(&data)).unwrap(), garbage);
}
