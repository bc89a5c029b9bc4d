use phone_core::{augment_file, parse_csv, AugmentOptions, Error, PhoneNumber};
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

const PEOPLE: &str = "id,name,city\n1,Alice,\"Oslo, NO\"\n2,Bob,Bergen\n3,Carol,\n4,Dave,Tromsø\n";

#[test]
fn test_missing_file_writes_nothing() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("missing.csv");

    let err = augment_file(&input, &AugmentOptions::default()).unwrap_err();

    assert!(err.is_not_found());
    assert!(!tmp.path().join("missing_with_phone.csv").exists());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_malformed_file_is_load_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("broken.csv");
    fs::write(&input, "a,b\n1,2\n3,4,5\n").unwrap();

    let err = augment_file(&input, &AugmentOptions::default()).unwrap_err();

    assert!(err.is_load_error());
    assert!(!tmp.path().join("broken_with_phone.csv").exists());
}

#[test]
fn test_output_preserves_rows_and_appends_phone() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.csv");
    fs::write(&input, PEOPLE).unwrap();

    let report = augment_file(&input, &AugmentOptions::default()).unwrap();

    assert_eq!(report.output_path, tmp.path().join("people_with_phone.csv"));
    assert_eq!(report.original_shape, (4, 3));
    assert_eq!(report.new_shape, (4, 4));
    assert_eq!(report.sample.len(), 4);

    // Input is untouched
    assert_eq!(fs::read_to_string(&input).unwrap(), PEOPLE);

    let original = parse_csv(&input).unwrap();
    let output = parse_csv(&report.output_path).unwrap();

    assert_eq!(output.column_names(), vec!["id", "name", "city", "phone"]);
    assert_eq!(output.row_count(), original.row_count());
    for (before, after) in original.rows.iter().zip(&output.rows) {
        assert_eq!(&after.cells[..3], &before.cells[..]);
    }

    let phones = output.column_values("phone").unwrap();
    assert_eq!(phones.iter().collect::<HashSet<_>>().len(), 4);
    assert!(phones.iter().all(|p| p.parse::<PhoneNumber>().is_ok()));
}

#[test]
fn test_two_runs_same_shape_different_values() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.csv");
    fs::write(&input, PEOPLE).unwrap();

    let first = augment_file(&input, &AugmentOptions::default()).unwrap();
    let first_table = parse_csv(&first.output_path).unwrap();
    let second = augment_file(&input, &AugmentOptions::default()).unwrap();
    let second_table = parse_csv(&second.output_path).unwrap();

    assert_eq!(first.output_path, second.output_path);
    assert_eq!(first_table.shape(), second_table.shape());
    assert_ne!(
        first_table.column_values("phone"),
        second_table.column_values("phone")
    );
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.csv");
    fs::write(&input, PEOPLE).unwrap();
    let options = AugmentOptions {
        seed: Some(2024),
        ..AugmentOptions::default()
    };

    let first = augment_file(&input, &options).unwrap();
    let first_out = fs::read_to_string(&first.output_path).unwrap();
    let second = augment_file(&input, &options).unwrap();
    let second_out = fs::read_to_string(&second.output_path).unwrap();

    assert_eq!(first_out, second_out);
}

#[test]
fn test_existing_phone_column_is_replaced() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("contacts.csv");
    fs::write(&input, "name,phone\nAlice,x\nBob,y\n").unwrap();

    let report = augment_file(&input, &AugmentOptions::default()).unwrap();
    assert!(report.replaced_existing);

    let output = parse_csv(&report.output_path).unwrap();
    assert_eq!(output.column_names(), vec!["name", "phone"]);
    assert_eq!(output.column_values("name").unwrap(), vec!["Alice", "Bob"]);

    let phones = output.column_values("phone").unwrap();
    assert_ne!(phones[0], phones[1]);
    assert!(phones.iter().all(|p| *p != "x" && *p != "y"));
}

#[test]
fn test_non_csv_extension_does_not_overwrite_input() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.txt");
    fs::write(&input, "name\nAlice\n").unwrap();

    let report = augment_file(&input, &AugmentOptions::default()).unwrap();

    assert_eq!(report.output_path, tmp.path().join("people_with_phone.txt"));
    assert_eq!(fs::read_to_string(&input).unwrap(), "name\nAlice\n");
}

#[test]
fn test_report_serializes_to_json() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.csv");
    fs::write(&input, "name\nAlice\nBob\n").unwrap();

    let report = augment_file(&input, &AugmentOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["column"], "phone");
    assert_eq!(json["new_shape"], serde_json::json!([2, 2]));
    assert_eq!(json["replaced_existing"], false);
}

#[test]
fn test_error_messages_name_the_file() {
    let err = augment_file("nowhere/missing.csv", &AugmentOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn test_empty_suffix_leaves_input_untouched() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("people.csv");
    fs::write(&input, "name\nAlice\n").unwrap();
    let options = AugmentOptions {
        suffix: String::new(),
        ..AugmentOptions::default()
    };

    let err = augment_file(&input, &options).unwrap_err();

    assert!(matches!(err, Error::InvalidSuffix(_)));
    assert_eq!(fs::read_to_string(&input).unwrap(), "name\nAlice\n");
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn test_suffix_cannot_leave_input_directory() {
    let tmp = tempdir().unwrap();
    let nested = tmp.path().join("in");
    fs::create_dir(&nested).unwrap();
    let input = nested.join("people.csv");
    fs::write(&input, "name\nAlice\n").unwrap();
    let options = AugmentOptions {
        suffix: "/../escaped".to_string(),
        ..AugmentOptions::default()
    };

    let err = augment_file(&input, &options).unwrap_err();

    assert!(matches!(err, Error::InvalidSuffix(_)));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    assert_eq!(fs::read_dir(&nested).unwrap().count(), 1);
}
