use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use convkit::{
    base64, binary, color, from_json_str, radix, tabular, to_xml, to_yaml, BinaryEncoding,
    ColorFormat, ConvertOptions, CsvTarget, NumberBase,
};

fn sample_csv(rows: usize) -> String {
    let mut csv = String::from("id,name,email,score\n");
    for i in 0..rows {
        csv.push_str(&format!("{i},user{i},user{i}@example.com,{}.5\n", i % 100));
    }
    csv
}

fn sample_json(items: usize) -> String {
    let items: Vec<String> = (0..items)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "name": "item{i}", "active": {}, "tags": ["a", "b"], "meta": {{"rank": {i}.25}}}}"#,
                i % 2 == 0
            )
        })
        .collect();
    format!(r#"{{"items": [{}]}}"#, items.join(", "))
}

fn benchmark_radix(c: &mut Criterion) {
    c.bench_function("radix_hex_128bit", |b| {
        b.iter(|| radix::convert(black_box("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"), NumberBase::Hex))
    });
}

fn benchmark_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    let text = "Hello, wörld! 😀 ".repeat(64);

    for encoding in BinaryEncoding::ALL {
        let bits = binary::text_to_binary(&text, *encoding).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("encode", encoding), &text, |b, text| {
            b.iter(|| binary::text_to_binary(black_box(text), *encoding))
        });
        if !bits.is_empty() {
            group.bench_with_input(BenchmarkId::new("decode", encoding), &bits, |b, bits| {
                b.iter(|| binary::binary_to_text(black_box(bits), *encoding))
            });
        }
    }
    group.finish();
}

fn benchmark_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");
    for (input, format) in [
        ("#3a7bd5", ColorFormat::Hex),
        ("rgb(58, 123, 213)", ColorFormat::Rgb),
        ("hsl(215, 65%, 53%)", ColorFormat::Hsl),
        ("cmyk(73%, 42%, 0%, 16%)", ColorFormat::Cmyk),
    ] {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| color::convert(black_box(input), format))
        });
    }
    group.finish();
}

fn benchmark_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("structured");
    let options = ConvertOptions::default();

    for size in [10, 100, 1000].iter() {
        let json = sample_json(*size);
        let value = from_json_str(&json).expect("benchmark JSON parses");

        group.bench_with_input(BenchmarkId::new("parse", size), &json, |b, json| {
            b.iter(|| from_json_str(black_box(json)))
        });
        group.bench_with_input(BenchmarkId::new("xml", size), &value, |b, value| {
            b.iter(|| to_xml(black_box(value), &options))
        });
        group.bench_with_input(BenchmarkId::new("yaml", size), &value, |b, value| {
            b.iter(|| to_yaml(black_box(value), &options))
        });
    }
    group.finish();
}

fn benchmark_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular");
    let options = ConvertOptions::default();

    for size in [10, 100, 1000].iter() {
        let csv = sample_csv(*size);
        for target in CsvTarget::ALL {
            group.bench_with_input(BenchmarkId::new(target.as_str(), size), &csv, |b, csv| {
                b.iter(|| tabular::convert(black_box(csv), *target, &options))
            });
        }
    }
    group.finish();
}

fn benchmark_base64(c: &mut Criterion) {
    let text = "lorem ipsum dolor sit amet ".repeat(256);
    let encoded = base64::encode(&text);

    let mut group = c.benchmark_group("base64");
    group.bench_function("encode", |b| b.iter(|| base64::encode(black_box(&text))));
    group.bench_function("decode", |b| b.iter(|| base64::decode(black_box(&encoded))));
    group.finish();
}

criterion_group!(
    benches,
    benchmark_radix,
    benchmark_binary,
    benchmark_color,
    benchmark_structured,
    benchmark_tabular,
    benchmark_base64
);
criterion_main!(benches);
