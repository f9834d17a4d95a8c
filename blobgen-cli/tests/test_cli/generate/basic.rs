use crate::add_test;
use crate::common::Fixture;
use crate::KB;

// Test default text generation produces the exact requested length
add_test!(writes_exact_text_payload, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["out.txt", "-s", "1KB"]).await;
    assert!(output.status.success());

    assert_eq!(fixture.file_len("out.txt"), KB as u64);
    let data = fixture.read_file("out.txt");
    assert!(data.starts_with(b"The quick brown fox"));
});

// Test the ten-byte custom pattern scenario
add_test!(custom_pattern_truncates_exactly, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["pattern.txt", "-s", "10", "-p", "AB"])
        .await;
    assert!(output.status.success());

    assert_eq!(fixture.read_file("pattern.txt"), b"ABABABABAB");
});

// Test the zeros scenario across a chunk boundary
add_test!(zeros_payload_is_all_zero, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["zeros.bin", "-s", "150000", "-c", "binary", "-b", "zeros"])
        .await;
    assert!(output.status.success());

    let data = fixture.read_file("zeros.bin");
    assert_eq!(data.len(), 150_000);
    assert!(data.iter().all(|&b| b == 0x00));
});

// Test the default binary fill is the 0..15 ramp
add_test!(sequential_ramp_payload, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_blobgen(&["ramp.bin", "-s", "64", "-c", "binary"])
        .await;
    assert!(output.status.success());

    let data = fixture.read_file("ramp.bin");
    assert_eq!(data.len(), 64);
    for (i, &byte) in data.iter().enumerate() {
        assert_eq!(byte as usize, i % 16);
    }
});

// Test random payloads agree on length but not on content
add_test!(random_payloads_differ, async {
    let fixture = Fixture::new();

    for name in ["a.bin", "b.bin"] {
        let output = fixture
            .run_blobgen(&[name, "-s", "4KB", "-c", "binary", "-b", "random"])
            .await;
        assert!(output.status.success());
        assert_eq!(fixture.file_len(name), 4 * KB as u64);
    }

    assert_ne!(fixture.read_file("a.bin"), fixture.read_file("b.bin"));
});

// Test that omitting the output file streams the payload to stdout
add_test!(stdout_when_no_output_file, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["-s", "8", "-p", "A"]).await;
    assert!(output.status.success());

    assert_eq!(output.stdout, b"AAAAAAAA");
    assert_eq!(fixture.entry_count(), 0);
});

// Test that "-" as the output file also means stdout
add_test!(dash_output_means_stdout, async {
    let fixture = Fixture::new();

    let output = fixture.run_blobgen(&["-", "-s", "4", "-p", "xy"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, b"xyxy");
});
