use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{mb, setup_data_dir};

#[test]
fn test_book_status_cancel_flow() {
    let data = setup_data_dir("book_status_cancel");

    mb().args(["--data", &data, "init"]).assert().success();

    // Breakfast booking window is 09:00-10:00.
    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 09:10",
        "book",
        "breakfast",
        "--id",
        "H001",
        "--password",
        "P001",
    ])
    .assert()
    .success()
    .stdout(contains("booked"))
    .stdout(contains("meal date 2024-03-02"));

    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 09:15",
        "status",
        "--id",
        "H001",
        "--meal",
        "breakfast",
    ])
    .assert()
    .success()
    .stdout(contains("breakfast"))
    .stdout(contains("booked"));

    // Breakfast cancel window is 09:30-10:30.
    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 09:45",
        "cancel",
        "breakfast",
        "--id",
        "H001",
        "--password",
        "P001",
    ])
    .assert()
    .success()
    .stdout(contains("cancelled"));

    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 10:00",
        "status",
        "--id",
        "H001",
        "--meal",
        "breakfast",
    ])
    .assert()
    .success()
    .stdout(contains("cancelled"));
}

#[test]
fn test_rebooking_after_cancel_wins() {
    let data = setup_data_dir("rebook_wins");

    mb().args(["--data", &data, "init"]).assert().success();

    // 09:40 is inside both the breakfast book and cancel windows.
    let at = "2024-03-01 09:40";
    for action in ["book", "cancel", "book"] {
        mb().args([
            "--data",
            &data,
            "--now",
            at,
            action,
            "breakfast",
            "--id",
            "H002",
            "--password",
            "P002",
        ])
        .assert()
        .success();
    }

    mb().args([
        "--data", &data, "--now", at, "status", "--id", "H002", "--meal", "breakfast", "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"is_booked\": true"))
    .stdout(contains("\"last_status\": \"booked\""));
}

#[test]
fn test_booking_outside_window_is_rejected() {
    let data = setup_data_dir("outside_window");

    mb().args(["--data", &data, "init"]).assert().success();

    // Dinner books 13:00-15:00; 09:10 is outside.
    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 09:10",
        "book",
        "dinner",
        "--id",
        "H001",
        "--password",
        "P001",
    ])
    .assert()
    .failure()
    .stderr(contains("window for dinner is closed"));

    // Nothing was appended.
    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 13:30",
        "status",
        "--id",
        "H001",
        "--meal",
        "dinner",
    ])
    .assert()
    .success()
    .stdout(contains("no record"));
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let data = setup_data_dir("boundaries");

    mb().args(["--data", &data, "init"]).assert().success();

    for at in ["2024-03-01 13:00", "2024-03-02 15:00"] {
        mb().args([
            "--data", &data, "--now", at, "book", "dinner", "--id", "H003", "--password", "P003",
        ])
        .assert()
        .success()
        .stdout(contains("booked"));
    }

    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-03 15:01",
        "book",
        "dinner",
        "--id",
        "H003",
        "--password",
        "P003",
    ])
    .assert()
    .failure()
    .stderr(contains("closed at 15:01"));
}

#[test]
fn test_double_booking_is_a_noop() {
    let data = setup_data_dir("double_booking");

    mb().args(["--data", &data, "init"]).assert().success();

    let args = [
        "--data",
        &data,
        "--now",
        "2024-03-01 07:30",
        "book",
        "lunch",
        "--id",
        "H004",
        "--password",
        "P004",
    ];
    mb().args(args).assert().success().stdout(contains("booked"));
    mb().args(args)
        .assert()
        .success()
        .stdout(contains("already booked"));

    // Only one ledger row was written.
    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("lunch      1 booked"));
}

#[test]
fn test_cancel_without_booking_warns() {
    let data = setup_data_dir("cancel_nothing");

    mb().args(["--data", &data, "init"]).assert().success();

    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 08:30",
        "cancel",
        "lunch",
        "--id",
        "H005",
        "--password",
        "P005",
    ])
    .assert()
    .success()
    .stdout(contains("No active lunch booking"));
}

#[test]
fn test_bad_credentials_are_rejected() {
    let data = setup_data_dir("bad_credentials");

    mb().args(["--data", &data, "init"]).assert().success();

    mb().args([
        "--data",
        &data,
        "--now",
        "2024-03-01 09:10",
        "book",
        "breakfast",
        "--id",
        "H001",
        "--password",
        "wrong",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid student id or password"));
}

#[test]
fn test_list_and_export_for_a_date() {
    let data = setup_data_dir("list_export");

    mb().args(["--data", &data, "init"]).assert().success();

    for (id, pass) in [("H001", "P001"), ("H002", "P002")] {
        mb().args([
            "--data",
            &data,
            "--now",
            "2024-03-01 13:30",
            "book",
            "dinner",
            "--id",
            id,
            "--password",
            pass,
        ])
        .assert()
        .success();
    }

    mb().args(["--data", &data, "list", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("H001"))
        .stdout(contains("H002"))
        .stdout(contains("dinner     2 booked"));

    // The meal-date view of the same bookings is keyed one day later.
    mb().args([
        "--data",
        &data,
        "list",
        "--date",
        "2024-03-02",
        "--by-meal-date",
    ])
    .assert()
    .success()
    .stdout(contains("H001"));

    let out = format!("{}/bookings_2024-03-01.csv", data);
    mb().args([
        "--data", &data, "export", "--file", &out, "--date", "2024-03-01",
    ])
    .assert()
    .success()
    .stdout(contains("2 rows"));

    let content = std::fs::read_to_string(&out).expect("export file");
    assert!(content.starts_with("booking_date,meal_date,student_id,meal,status,timestamp"));
    assert!(content.contains("2024-03-01,2024-03-02,H001,dinner,booked"));

    // Refuses to clobber without --force.
    mb().args([
        "--data", &data, "export", "--file", &out, "--date", "2024-03-01",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_menu_image_round_trip() {
    let data = setup_data_dir("menu_image");

    mb().args(["--data", &data, "init"]).assert().success();

    let src = format!("{}/menu_src.png", data);
    std::fs::write(&src, b"not really a png").unwrap();

    // Default date is tomorrow's meal date.
    mb().args(["--data", &data, "--now", "2024-03-01 12:00", "menu", "--set", &src])
        .assert()
        .success()
        .stdout(contains("menu_2024-03-02.png"));

    mb().args(["--data", &data, "menu", "--date", "2024-03-02"])
        .assert()
        .success()
        .stdout(contains("menu_2024-03-02.png"));

    assert!(Path::new(&data).join("menu_images/menu_2024-03-02.png").exists());

    mb().args(["--data", &data, "menu", "--date", "2030-01-01"])
        .assert()
        .success()
        .stdout(contains("No menu image").or(contains("no menu image")));
}
