//! Benchmarks for samplerctl protocol decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use samplerctl::protocol::{escape, parse_params, unescape};

fn codec_benchmarks(c: &mut Criterion) {
    let plain = "/usr/share/sounds/gig/Performance Grand Piano.gig";
    let gnarly = "f\u{FC}r 'Elise'\twith\nnewlines and \\backslashes\\";
    let wire = escape(gnarly).unwrap();

    c.bench_function("escape_plain", |b| {
        b.iter(|| escape(black_box(plain)).unwrap())
    });

    c.bench_function("escape_gnarly", |b| {
        b.iter(|| escape(black_box(gnarly)).unwrap())
    });

    c.bench_function("unescape_gnarly", |b| {
        b.iter(|| unescape(black_box(&wire)))
    });

    let block = [
        "NAME: SAMPLERATE",
        "TYPE: INT",
        "DESCRIPTION: output sample rate in Hz",
        "MULTIPLICITY: false",
        "FIX: false",
        "MANDATORY: false",
        "DEPENDS: CARD",
        "RANGE_MIN: 8000",
        "RANGE_MAX: 192000",
        "POSSIBILITIES: 44100,48000,96000",
        "DEFAULT: 44100",
    ];

    c.bench_function("parse_params_block", |b| {
        b.iter(|| parse_params(black_box(block)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
