use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use latin_analysis::{
    Analyzer, AnalyzerConfig, FilterSpec, LatinNumberConverter, LatinNumberNormalizer,
    LatinStemmer, StemAlternator, Token, VecTokenStream, collect_tokens,
};

const WORDS: &[&str] = &[
    "Gallia", "est", "omnis", "divisa", "in", "partes", "tres", "quarum", "unam", "incolunt",
    "Belgae", "aliam", "Aquitani", "tertiam", "qui", "ipsorum", "lingua", "Celtae", "nostra",
    "Galli", "appellantur", "populusque", "senatusque", "atque", "amaverunt", "militibus",
];

const NUMERALS: &[&str] = &[
    "I", "IV", "XIX", "XLII", "MCMXC", "MMXXIV", "MDCCCLXXXVIII", "IC", "MXM", "IIII", "VX",
    "CIↃXCIX", "CCCIↃↃↃ", "Ⅻ", "ⅿⅽⅿ",
];

/// Generate a token stream of `count` words cycling through a sample list
fn generate_tokens(sample: &[&str], count: usize) -> Vec<Token> {
    let mut offset = 0;
    sample
        .iter()
        .cycle()
        .take(count)
        .map(|word| {
            let token = Token::word(*word, offset, offset + word.len());
            offset += word.len() + 1;
            token
        })
        .collect()
}

fn bench_numerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerals");
    let normalizer = LatinNumberNormalizer::new();
    let lenient = LatinNumberConverter::new(false);
    let strict = LatinNumberConverter::strict();

    group.throughput(Throughput::Elements(NUMERALS.len() as u64));

    group.bench_function("normalize", |b| {
        b.iter(|| {
            for numeral in NUMERALS {
                black_box(normalizer.normalize(black_box(numeral)));
            }
        });
    });

    group.bench_function("convert_lenient", |b| {
        b.iter(|| {
            for numeral in NUMERALS {
                black_box(lenient.convert(black_box(numeral)));
            }
        });
    });

    group.bench_function("convert_strict", |b| {
        b.iter(|| {
            for numeral in NUMERALS {
                black_box(strict.convert(black_box(numeral)));
            }
        });
    });

    group.finish();
}

fn bench_stemmer(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemmer");
    let stemmer = LatinStemmer::new();

    group.throughput(Throughput::Elements(WORDS.len() as u64));

    group.bench_function("stem_as_noun", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem_as_noun(black_box(word)));
            }
        });
    });

    group.bench_function("stem_as_verb", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem_as_verb(black_box(word)));
            }
        });
    });

    group.bench_function("alternator_readings", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(StemAlternator::readings(black_box(word)));
            }
        });
    });

    group.finish();
}

fn bench_analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");

    let config = AnalyzerConfig::new()
        .with_filter(FilterSpec::new("latinNumberNormalization"))
        .with_filter(FilterSpec::new("latinNumberConvert"))
        .with_filter(FilterSpec::new("latinStem"));
    let Ok(analyzer) = Analyzer::from_config(&config) else {
        return;
    };

    for count in [100, 1_000, 10_000] {
        let mut sample: Vec<&str> = WORDS.to_vec();
        sample.extend_from_slice(NUMERALS);
        let tokens = generate_tokens(&sample, count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("full_chain", count), &tokens, |b, tokens| {
            b.iter(|| {
                let stream = analyzer.analyze(VecTokenStream::new(tokens.iter().cloned()));
                black_box(collect_tokens(stream))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_numerals, bench_stemmer, bench_analyzer);
criterion_main!(benches);
