use crate::add_test;
use crate::common::Fixture;

// Test a zero-byte target creates an empty file
add_test!(zero_size_creates_empty_file, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["empty.bin", "-s", "0"]).await;
    assert!(output.status.success());

    assert!(fixture.file_exists("empty.bin"));
    assert_eq!(fixture.file_len("empty.bin"), 0);
});

// Test an unparseable size expression fails before any output
add_test!(rejects_bogus_size, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.bin", "-s", "bogus"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid size expression"));
    assert!(!fixture.file_exists("out.bin"));
});

// Test a negative size is rejected with a distinct message
add_test!(rejects_negative_size, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.bin", "--size=-1KB"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-negative"));
    assert!(!fixture.file_exists("out.bin"));
});

// Test an empty custom pattern is rejected
add_test!(rejects_empty_pattern, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.txt", "-s", "10", "-p", ""]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pattern"));
});

// Test a zero chunk size is rejected
add_test!(rejects_zero_chunk_size, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.bin", "-s", "10", "-C", "0"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("chunk size"));
});

// Test an unknown content kind is rejected
add_test!(rejects_unknown_content_kind, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["out.bin", "-s", "10", "-c", "blob"])
        .await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("content kind"));
});

// Test a missing size argument is a usage error
add_test!(missing_size_is_usage_error, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.bin"]).await;
    assert!(!output.status.success());
    assert!(!fixture.file_exists("out.bin"));
});

// Test a fractional size floors to whole bytes
add_test!(fractional_size_floors, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["frac.bin", "-s", "1.5KB", "-c", "binary", "-b", "ones"])
        .await;
    assert!(output.status.success());
    assert_eq!(fixture.file_len("frac.bin"), 1536);
});

// Test --pattern with binary content warns but still succeeds
add_test!(pattern_with_binary_warns, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["warn.bin", "-s", "16", "-c", "binary", "-p", "AB"])
        .await;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no effect"));
    assert_eq!(fixture.file_len("warn.bin"), 16);
});

// Test -q silences the binary-pattern warning
add_test!(quiet_silences_warnings, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["warn.bin", "-s", "16", "-c", "binary", "-p", "AB", "-q"])
        .await;
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
});
