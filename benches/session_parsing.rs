use std::hint::black_box;

use chat_history_explorer::filters::{ChatQuery, list_previews};
use chat_history_explorer::parsers::parse_session_lines;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate the text of a synthetic session file with N entries
fn generate_session(num_entries: usize) -> String {
    let mut content = String::new();

    for i in 0..num_entries {
        let entry = if i % 2 == 0 {
            format!(
                r#"{{"type":"user","timestamp":"2024-01-{:02}T12:00:00Z","message":{{"role":"user","content":"Test prompt {}"}}}}"#,
                (i % 28) + 1,
                i
            )
        } else {
            format!(
                r#"{{"type":"assistant","timestamp":"2024-01-{:02}T12:00:05Z","message":{{"role":"assistant","content":[{{"type":"text","text":"Reply {}"}},{{"type":"tool_use","id":"t{}","name":"read","input":{{}}}}]}}}}"#,
                (i % 28) + 1,
                i,
                i
            )
        };
        content.push_str(&entry);
        content.push('\n');
    }

    content
}

fn bench_parse_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_session_lines");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let content = generate_session(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_session_lines(black_box(&content), "-Users-bench-project", "session"));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let chats: Vec<_> = (0..500)
        .filter_map(|i| parse_session_lines(&generate_session(20), &format!("-Users-bench-p{}", i), "s"))
        .collect();

    c.bench_function("list_previews_search", |b| {
        b.iter(|| list_previews(black_box(&chats), &ChatQuery::new().search("prompt 19")));
    });
}

criterion_group!(benches, bench_parse_session, bench_search);
criterion_main!(benches);
