use crate::add_test;
use crate::common::Fixture;
use crate::KB;

// Test overwrite protection without -f
add_test!(refuses_to_overwrite_without_force, async {
    let fixture = Fixture::new();
    fixture.write_file("exists.txt", b"keep me");

    let output = fixture.run_blobgen(&["exists.txt", "-s", "16"]).await;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    assert_eq!(fixture.read_file("exists.txt"), b"keep me");
});

// Test overwrite with -f (force) flag
add_test!(force_overwrites_existing_file, async {
    let fixture = Fixture::new();
    fixture.write_file("exists.txt", b"old content");

    let output = fixture.run_blobgen(&["exists.txt", "-s", "16", "-f"]).await;
    assert!(output.status.success());
    assert_eq!(fixture.file_len("exists.txt"), 16);
});

// Test a custom chunk size that doesn't divide the target evenly
add_test!(custom_chunk_size, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&[
            "ones.bin", "-s", "100KB", "-C", "16KB", "-c", "binary", "-b", "ones",
        ])
        .await;
    assert!(output.status.success());

    let data = fixture.read_file("ones.bin");
    assert_eq!(data.len(), 100 * KB);
    assert!(data.iter().all(|&b| b == 0xFF));
});

// Test verbose mode reports progress and a summary on stderr
add_test!(verbose_reports_progress, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["v.bin", "-s", "1KB", "-v"]).await;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("100.0%"));
    assert!(stderr.contains("Wrote"));
});

// Test non-verbose runs stay silent on success
add_test!(default_run_is_silent, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["s.bin", "-s", "1KB"]).await;
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
});

// Test -qq suppresses runtime error messages
add_test!(double_quiet_suppresses_errors, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.bin", "-s", "bogus", "-qq"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.is_empty());
    assert!(!fixture.file_exists("out.bin"));
});

// Test atomic mode lands the payload at the final path with no leftovers
add_test!(atomic_writes_final_file, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["atomic.bin", "-s", "1KB", "--atomic", "-c", "binary", "-b", "zeros"])
        .await;
    assert!(output.status.success());

    assert_eq!(fixture.file_len("atomic.bin"), KB as u64);
    assert_eq!(fixture.entry_count(), 1);
});

// Test atomic mode combined with force replaces the existing file
add_test!(atomic_force_replaces_existing, async {
    let fixture = Fixture::new();
    fixture.write_file("atomic.bin", b"old");

    let output = fixture
        .run_blobgen(&["atomic.bin", "-s", "32", "--atomic", "-f"])
        .await;
    assert!(output.status.success());
    assert_eq!(fixture.file_len("atomic.bin"), 32);
    assert_eq!(fixture.entry_count(), 1);
});
