#![no_main]

use std::hint::black_box;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = black_box(::exact_float::parse::<f32, _>(data));
    let _ = black_box(::exact_float::parse::<f64, _>(data));
    let _ = black_box(::exact_float::parse_partial::<f32, _>(data));
    let _ = black_box(::exact_float::parse_partial::<f64, _>(data));
});
