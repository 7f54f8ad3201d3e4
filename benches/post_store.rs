use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strum::IntoEnumIterator;

use thinkbucks::domain::{
    forum::{Category, CategoryFilter, PostStore},
    session::Session,
    text::wrap_text,
};

const BODY: &str = "Creating quality content that deserves rewards requires thoughtful \
                    planning, research, and genuine value delivery. 分散型フォーラムでは、\
                    価値ある投稿がトークンで報われる。";

fn populated_store(posts: usize, authors: usize) -> PostStore {
    let sessions: Vec<Session> = (0..authors)
        .map(|i| Session::new(format!("ST{i:012}"), format!("user{i}")))
        .collect();
    let categories: Vec<Category> = Category::iter().collect();
    let mut store = PostStore::new();
    for i in 0..posts {
        let _ = store.create(
            &format!("Post {i}"),
            BODY,
            categories[i % categories.len()],
            sessions.get(i % authors),
        );
    }
    store
}

fn benchmark(c: &mut Criterion) {
    let store = populated_store(1_000, 50);

    c.bench_function("list-by-category", |b| {
        b.iter(|| {
            store
                .list_by_category(black_box(CategoryFilter::Only(Category::Technology)))
                .count()
        })
    });

    c.bench_function("list-by-author", |b| {
        b.iter(|| store.list_by_author(black_box("ST000000000007")).count())
    });

    c.bench_function("aggregate", |b| b.iter(|| black_box(&store).aggregate()));

    c.bench_function("wrap-body", |b| {
        b.iter(|| wrap_text(black_box(BODY), black_box(40)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
