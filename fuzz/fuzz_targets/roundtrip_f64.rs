#![no_main]
use libfuzzer_sys::fuzz_target;

// Only f64 round-trips are fuzzed; the f32 search space is small enough
// to be covered exhaustively by the ignored integration test.

fuzz_target!(|float: f64| {
    let roundtripped: f64 = ::exact_float::parse(float.to_string()).unwrap();
    if float.is_nan() {
        assert!(roundtripped.is_nan());
    } else {
        assert_eq!(float, roundtripped);
    }
});
