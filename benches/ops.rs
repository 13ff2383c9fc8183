// SPDX-FileCopyrightText: 2026 Fastflow Authors
// SPDX-License-Identifier: LicenseRef-Fastflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fastflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use fastflow::editor::{Command, FlowEditor, GraphView, InputWidget, GUARD_WINDOW};
use fastflow::place::Direction;
use fastflow::render::render_graph;

// Benchmark identity (keep stable):
// - Group names in this file: `editor.commands`, `render.graph`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `spawn_label_16`, `cycle_64`).

#[derive(Debug, Default)]
struct NullView;

impl GraphView for NullView {
    fn fit_view(&mut self) {}

    fn focus_surface(&mut self) {}
}

#[derive(Debug, Default)]
struct NullInput {
    value: String,
}

impl InputWidget for NullInput {
    fn show(&mut self) {}

    fn hide(&mut self) {}

    fn focus(&mut self) {}

    fn set_value(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }

    fn value(&self) -> &str {
        &self.value
    }
}

type BenchEditor = FlowEditor<NullView, NullInput>;

fn editor_with_boxes(count: usize) -> (BenchEditor, Instant) {
    let mut now = Instant::now();
    let mut editor = FlowEditor::new_at(NullView, NullInput::default(), now);
    now += GUARD_WINDOW;
    editor.apply_at(Command::BufferChanged("root".to_owned()), now).expect("label root");
    editor.apply_at(Command::Confirm, now).expect("commit root");

    let directions =
        [Direction::Down, Direction::Right, Direction::Up, Direction::Left, Direction::Down];
    for index in 1..count {
        let direction = directions[index % directions.len()];
        editor.apply_at(Command::Spawn(direction), now).expect("spawn");
        now += GUARD_WINDOW;
        editor
            .apply_at(Command::BufferChanged(format!("box {index}")), now)
            .expect("label");
        editor.apply_at(Command::Confirm, now).expect("commit");
    }
    (editor, now)
}

fn bench_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor.commands");

    for count in [16usize, 64] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("spawn_label_{count}"), |b| {
            b.iter_batched(
                || (),
                |()| {
                    let (editor, _) = editor_with_boxes(count);
                    black_box(editor.graph().node_count())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("cycle_{count}"), |b| {
            b.iter_batched(
                || editor_with_boxes(count),
                |(mut editor, now)| {
                    editor.apply_at(Command::ToggleMode, now).expect("enter edit");
                    for _ in 0..count {
                        editor.apply_at(Command::CycleSelection, now).expect("cycle");
                    }
                    black_box(editor.cursor_index())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.graph");

    for count in [16usize, 64] {
        let (editor, _) = editor_with_boxes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("boxes_{count}"), |b| {
            b.iter(|| black_box(render_graph(editor.graph()).lines().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_commands, bench_render);
criterion_main!(benches);
