use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reviewcrawl::filtering::EntryFilter;
use reviewcrawl::review::Label;
use reviewcrawl::sources::ReviewExtractor;

/// A listing page the size of a real one (15 reviews per page).
fn listing_page() -> String {
    let cards: String = (0..15)
        .map(|i| {
            format!(
                r#"<div class="hred review-card cf">
                    <div class="review-card-aside"><a class="xXx">Spectateur {i}</a></div>
                    <div class="review-card-review-holder">
                        <div class="review-card-meta">
                            <span class="stareval-note">{},{}</span>
                        </div>
                        <div class="content-txt review-card-content">
                            Critique numéro {i}. Une mise en scène soignée,<br>des acteurs convaincants,
                            mais un scénario qui s'essouffle dans la dernière partie du film.
                        </div>
                    </div>
                </div>"#,
                i % 6,
                (i % 2) * 5,
                i = i
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Critiques spectateurs</title></head><body><main>{}</main></body></html>",
        cards
    )
}

pub fn extract_benchmark(c: &mut Criterion) {
    let page = listing_page();
    let extractor = ReviewExtractor::new().unwrap();
    let filter = EntryFilter::new(Label::Pos, 50);

    c.bench_function("extract", |b| b.iter(|| extractor.extract(black_box(&page))));
    c.bench_function("extract+classify", |b| {
        b.iter(|| {
            extractor
                .extract(black_box(&page))
                .iter()
                .map(|entry| filter.classify(entry))
                .count()
        })
    });
}

criterion_group!(benches, extract_benchmark);
criterion_main!(benches);
