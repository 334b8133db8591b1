//! O(n) Performance Verification Tests for TokenStream

use super::tokenize::TokenStream;

fn with_step_counter<F: FnOnce()>(f: F) -> usize {
    use crate::template::engine::tokenize::test_counter;
    test_counter::reset();
    f();
    test_counter::get()
}

fn drain(text: &str) -> usize {
    with_step_counter(|| {
        let mut stream = TokenStream::new(text);
        while stream.next().is_some() {}
    })
}

fn steps_per_byte(steps: usize, input_len: usize) -> f64 {
    steps as f64 / input_len as f64
}

#[test]
fn test_tokenstream_o_n_performance() {
    let make = |count: usize| {
        (0..count)
            .map(|i| format!("@if C{i}\nx <V{i}=a|b>\n@else\ny\n@endif\n"))
            .collect::<String>()
    };
    let text_100 = make(100);
    let text_1000 = make(1000);
    let text_10000 = make(10000);

    let spb_100 = steps_per_byte(drain(&text_100), text_100.len());
    let spb_1000 = steps_per_byte(drain(&text_1000), text_1000.len());
    let spb_10000 = steps_per_byte(drain(&text_10000), text_10000.len());

    // Steps-per-byte stays flat as input grows
    let avg_spb = (spb_100 + spb_1000 + spb_10000) / 3.0;
    let tolerance = avg_spb * 0.2;
    for spb in [spb_100, spb_1000, spb_10000] {
        assert!(
            (spb - avg_spb).abs() <= tolerance,
            "Steps-per-byte variance too high: {:.3} vs avg {:.3}",
            spb,
            avg_spb
        );
    }
}

#[test]
fn test_tokenstream_steps_never_exceed_input_length() {
    let inputs = [
        "<".repeat(1000),
        "@".repeat(1000),
        "@if ".repeat(500),
        "// // // @endblockx\n".repeat(100),
        "<A=b|c|d|e|f ".repeat(200),
        "x".repeat(5000),
    ];

    for text in &inputs {
        let steps = drain(text);
        assert!(
            steps <= text.len(),
            "Steps {} exceeded input length {}",
            steps,
            text.len()
        );
    }
}

#[test]
fn test_tokenstream_worst_case_failed_headers() {
    // Headers that parse up to the last byte before failing
    let text = "@if Name:maybe ".repeat(1000);

    let spb = steps_per_byte(drain(&text), text.len());
    assert!(
        spb <= 3.0,
        "Steps-per-byte {} exceeded 3.0 for failed headers",
        spb
    );
}

#[test]
fn test_tokenstream_worst_case_sparse_tokens() {
    let text = (0..100)
        .map(|i| format!("{} <Token{}>", "x".repeat(100), i))
        .collect::<String>();

    let spb = steps_per_byte(drain(&text), text.len());
    assert!(
        spb <= 3.0,
        "Steps-per-byte {} exceeded 3.0 for sparse token input",
        spb
    );
}
