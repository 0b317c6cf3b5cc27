//! Property-based tests for the record codec
//!
//! Covers the CSV and JSON round-trip laws, empty-input behavior, and the
//! per-format handling of malformed entries.

use proptest::prelude::*;

use student_records::codec::{CodecOptions, MalformedPolicy, RecordCodec, CSV_HEADER};
use student_records::error::ErrorKind;
use student_records::student::Student;

/// Strategy for generating valid names
/// Names start and end with a letter so trimming never changes them
fn valid_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Simple single-word names
        "[A-Za-z]{1,12}".prop_map(|s| s),
        // Names with umlauts
        "[A-Za-zäöüÄÖÜß]{1,12}".prop_map(|s| s),
        // Multi-part names with spaces or hyphens
        "[A-Z][a-z]{0,6}[ -][A-Z][a-z]{0,6}".prop_map(|s| s),
    ]
}

fn valid_student_strategy() -> impl Strategy<Value = Student> {
    (
        1001u32..=999_999,
        valid_name_strategy(),
        valid_name_strategy(),
        prop_oneof![1900i32..2030, any::<i32>()],
    )
        .prop_map(|(number, first, last, year)| {
            Student::new(number, &first, &last, year).expect("strategy yields valid students")
        })
}

fn students_strategy() -> impl Strategy<Value = Vec<Student>> {
    prop::collection::vec(valid_student_strategy(), 0..20)
}

/// Strategy for CSV data lines that can never decode to a student
fn malformed_csv_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Too few fields
        "[0-9]{4},[A-Za-z]{1,8}".prop_map(|s| s),
        // Too many fields
        "[0-9]{4},[A-Za-z]{1,8},[A-Za-z]{1,8},[0-9]{4},extra".prop_map(|s| s),
        // Non-numeric id
        "[a-z]{1,6},[A-Za-z]{1,8},[A-Za-z]{1,8},[0-9]{4}".prop_map(|s| s),
        // Non-numeric birth year
        "[0-9]{4},[A-Za-z]{1,8},[A-Za-z]{1,8},[a-z]{1,6}".prop_map(|s| s),
        // Id below the legal range
        "[0-9]{1,3},[A-Za-z]{1,8},[A-Za-z]{1,8},[0-9]{4}".prop_map(|s| s),
        // Digits in a name
        "[0-9]{5},[A-Za-z]{0,4}[0-9][A-Za-z]{0,4},[A-Za-z]{1,8},[0-9]{4}".prop_map(|s| s),
        // Unbalanced quote opening a name
        "[0-9]{4},\"[A-Za-z]{1,8},[A-Za-z]{1,8},[0-9]{4}".prop_map(|s| s),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // CSV round-trip: decode(encode(R)) == R, order and duplicates preserved
    #[test]
    fn property_csv_round_trip(students in students_strategy()) {
        let codec = RecordCodec::default();

        let text = codec.encode_csv(&students).expect("encode should succeed");
        let decoded = codec.decode_csv(&text).expect("decode should succeed");

        prop_assert_eq!(decoded, students);
    }

    // JSON round-trip, compact and pretty
    #[test]
    fn property_json_round_trip(students in students_strategy(), pretty in any::<bool>()) {
        let codec = RecordCodec::new(CodecOptions {
            pretty_json: pretty,
            ..CodecOptions::default()
        });

        let text = codec.encode_json(&students).expect("encode should succeed");
        let decoded = codec.decode_json(&text).expect("decode should succeed");

        prop_assert_eq!(decoded, students);
    }

    // CSV output is one header line plus one line per record
    #[test]
    fn property_csv_line_count(students in students_strategy()) {
        let text = RecordCodec::default().encode_csv(&students).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        prop_assert_eq!(lines.len(), students.len() + 1);
        prop_assert_eq!(lines[0], CSV_HEADER.join(","));
    }

    // Malformed lines are dropped and every valid line survives, in order
    #[test]
    fn property_csv_skips_malformed_lines(
        students in students_strategy(),
        bad_lines in prop::collection::vec(malformed_csv_line_strategy(), 1..5),
        seed in any::<u64>(),
    ) {
        let codec = RecordCodec::default();
        let encoded = codec.encode_csv(&students).unwrap();
        let mut lines: Vec<String> = encoded.lines().map(str::to_string).collect();

        // Insert each bad line somewhere after the header
        for (i, bad) in bad_lines.iter().enumerate() {
            let slot = 1 + ((seed as usize).wrapping_add(i * 7) % lines.len());
            lines.insert(slot, bad.clone());
        }
        let text = lines.join("\n");

        let report = codec.decode_csv_report(&text).unwrap();
        prop_assert_eq!(report.students, students);
        prop_assert_eq!(report.skipped.len(), bad_lines.len());
    }

    // Under the reject policy the same input fails as a whole
    #[test]
    fn property_csv_reject_policy_fails(
        students in students_strategy(),
        bad in malformed_csv_line_strategy(),
    ) {
        let codec = RecordCodec::new(CodecOptions {
            csv_policy: MalformedPolicy::Reject,
            ..CodecOptions::default()
        });
        let mut text = codec.encode_csv(&students).unwrap();
        text.push_str(&bad);
        text.push('\n');

        let error = codec.decode_csv(&text).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::Malformed);
    }

    // One bad object anywhere makes the default JSON decode fail with no records
    #[test]
    fn property_json_strict_fail(
        students in prop::collection::vec(valid_student_strategy(), 1..10),
        index in any::<prop::sample::Index>(),
    ) {
        let codec = RecordCodec::default();
        let text = codec.encode_json(&students).unwrap();

        let mut objects: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        let target = index.index(objects.len());
        objects[target]["birthYear"] = serde_json::Value::String("oops".to_string());
        let broken = serde_json::to_string(&objects).unwrap();

        let error = codec.decode_json(&broken).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::Malformed);
    }
}

#[test]
fn test_empty_inputs_decode_to_nothing() {
    let codec = RecordCodec::default();

    assert!(codec.decode_csv("").unwrap().is_empty());
    assert!(codec
        .decode_csv("id,firstName,lastName,birthYear\n")
        .unwrap()
        .is_empty());
    assert!(codec.decode_json("[]").unwrap().is_empty());
    assert!(codec.decode_json("").unwrap().is_empty());
}

#[test]
fn test_scenario_encodings() {
    let codec = RecordCodec::default();
    let students = vec![
        Student::new(1001, "Alice", "Anderson", 2000).unwrap(),
        Student::new(1002, "Bob", "Brown", 1999).unwrap(),
    ];

    let csv = codec.encode_csv(&students).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,firstName,lastName,birthYear",
            "1001,Alice,Anderson,2000",
            "1002,Bob,Brown,1999",
        ]
    );

    assert_eq!(
        codec.encode_json(&students).unwrap(),
        r#"[{"matriculationNumber":1001,"firstName":"Alice","lastName":"Anderson","birthYear":2000},{"matriculationNumber":1002,"firstName":"Bob","lastName":"Brown","birthYear":1999}]"#
    );
}

#[test]
fn test_csv_skip_on_short_line() {
    let text = "id,firstName,lastName,birthYear\n1001,Alice,Anderson,2000\n1002,Bob\n";
    let students = RecordCodec::default().decode_csv(text).unwrap();

    assert_eq!(
        students,
        vec![Student::new(1001, "Alice", "Anderson", 2000).unwrap()]
    );
}

#[test]
fn test_json_strict_fail_on_string_birth_year() {
    let text = r#"[{"matriculationNumber":1001,"firstName":"Alice","lastName":"Anderson","birthYear":2000},{"matriculationNumber":1002,"firstName":"Bob","lastName":"Brown","birthYear":"oops"}]"#;
    let error = RecordCodec::default().decode_json(text).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Malformed);
}
