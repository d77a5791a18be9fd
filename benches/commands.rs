//! Benchmarks for toolbar commands on a large document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use marktool::editor::EditorBuffer;
use marktool::toolbar::{FormatAction, ToolbarOptions};

fn large_document() -> String {
    let mut md = String::from("# Notes\n\n");
    for i in 1..=2000 {
        md.push_str(&format!("- item {i} with some trailing words\n"));
    }
    md
}

fn bench_line_toggle(c: &mut Criterion) {
    let md = large_document();
    let options = ToolbarOptions::default();
    c.bench_function("task_list_toggle_mid_document", |b| {
        b.iter_batched(
            || {
                let mut buf = EditorBuffer::from_text(&md);
                buf.set_caret(md.chars().count() / 2).unwrap();
                buf
            },
            |mut buf| {
                FormatAction::TaskList.apply(&mut buf, black_box(&options));
                buf
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_wrap_selection(c: &mut Criterion) {
    let md = large_document();
    let options = ToolbarOptions::default();
    c.bench_function("bold_large_selection", |b| {
        b.iter_batched(
            || {
                let mut buf = EditorBuffer::from_text(&md);
                buf.select(9, md.chars().count() - 1).unwrap();
                buf
            },
            |mut buf| {
                FormatAction::Bold.apply(&mut buf, black_box(&options));
                buf
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_line_toggle, bench_wrap_selection);
criterion_main!(benches);
