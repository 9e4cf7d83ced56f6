use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textgauge_core::{Lexicon, LexiconPaths, MetricsEngine, count_syllables, extract_article_from_html};

fn fixture_engine() -> MetricsEngine {
    let paths = LexiconPaths {
        stop_words_dir: "../../tests/fixtures/lexicon/StopWords".into(),
        positive_words: "../../tests/fixtures/lexicon/MasterDictionary/positive-words.txt".into(),
        negative_words: "../../tests/fixtures/lexicon/MasterDictionary/negative-words.txt".into(),
    };
    MetricsEngine::new(Lexicon::load(&paths).unwrap())
}

fn article_text() -> String {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();
    extract_article_from_html(&html).unwrap().text()
}

fn bench_compute(c: &mut Criterion) {
    let engine = fixture_engine();
    let small = article_text();
    let large = small.repeat(200);

    let mut group = c.benchmark_group("compute");

    group.bench_with_input(BenchmarkId::new("article", "1x"), &small, |b, text| {
        b.iter(|| engine.compute(black_box(text)))
    });

    group.bench_with_input(BenchmarkId::new("article", "200x"), &large, |b, text| {
        b.iter(|| engine.compute(black_box(text)))
    });

    group.finish();
}

fn bench_syllables(c: &mut Criterion) {
    let words = ["the", "beautiful", "education", "rhythm", "likes", "renewable"];

    c.bench_function("count_syllables", |b| {
        b.iter(|| words.iter().map(|w| count_syllables(black_box(w))).sum::<Option<usize>>())
    });
}

fn bench_extract(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/article.html").unwrap();

    c.bench_function("extract_article", |b| b.iter(|| extract_article_from_html(black_box(&html))));
}

criterion_group!(benches, bench_compute, bench_syllables, bench_extract);
criterion_main!(benches);
