//! Performance benchmarks for tagwiki.
//!
//! Run with: `cargo bench`
//!
//! Network access is not involved: the article comes from an in-memory
//! fixture.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::collections::HashSet;
use tagwiki::{
    clean, select_tags, top_tokens_by_frequency, Annotator, BlockKind, ContentBlock,
    FrequencyTable, LexiconAnnotator,
};

const PARAGRAPH: &str = "Ranomafana National Park is a national park in the southeastern \
part of Madagascar [1]. With more than 41,600 hectares (2) of tropical rainforest, \
Ranomafana is home to several rare species of flora and fauna [a], including the \
golden bamboo lemur, greater bamboo lemur and Milne-Edwards's sifaka.\n";

fn blocks(n: usize) -> Vec<ContentBlock> {
    (0..n)
        .flat_map(|i| {
            [
                ContentBlock::new(BlockKind::Heading2, format!("Section {i}")),
                ContentBlock::new(BlockKind::Paragraph, PARAGRAPH),
                ContentBlock::new(BlockKind::Table, "Year 2001 2002 2003"),
            ]
        })
        .collect()
}

fn bench_clean(c: &mut Criterion) {
    let blocks = blocks(200);
    let bytes: usize = blocks.iter().map(|b| b.text.len()).sum();

    let mut group = c.benchmark_group("clean");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("200_sections", |b| b.iter(|| clean(black_box(&blocks))));
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let text = clean(&blocks(200));
    let tokens = LexiconAnnotator::english()
        .annotate(&text)
        .unwrap_or_default();
    let stopwords: HashSet<String> = ["the", "of", "and", "is", "a", "in"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    c.bench_function("top_tokens_by_frequency", |b| {
        b.iter(|| top_tokens_by_frequency(black_box(&tokens), &stopwords, 5));
    });

    let table = FrequencyTable::build(&tokens, &stopwords);
    c.bench_function("select_tags", |b| {
        b.iter(|| select_tags(black_box(table.entries()), 10));
    });
}

criterion_group!(benches, bench_clean, bench_rank);
criterion_main!(benches);
