// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for phase-file parsing and body rendering.

use std::fmt::Write;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gs_core::{parse_phase, render_body, LabelPolicy};

fn phase_file(issues: usize) -> String {
    let mut content = String::from("# Phase 3: Bench\n\n");
    for i in 1..=issues {
        let _ = write!(
            content,
            "### M3-{i}: Generated issue {i}
**Type**: `type:feature`
**Priority**: `P1`
**Effort**: `effort:medium`
**Depends On**: M3-{prev}
**Blocks**: None

**Description**:
Issue number {i} of the generated phase.

**Acceptance Criteria**:
- [ ] first criterion
- [ ] second criterion

**Files to Create/Modify**:
- `src/module_{i}.rs`

**Testing**:
Unit tests for module {i}.

**Story**:
```
As a developer I want item {i}.
```

",
            prev = i.saturating_sub(1).max(1),
        );
    }
    content
}

fn parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_phase");
    for size in [10, 100, 1000] {
        let content = phase_file(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, c| {
            b.iter(|| parse_phase("phase-3-bench", c))
        });
    }
    group.finish();
}

fn rendering(c: &mut Criterion) {
    let issues = parse_phase("phase-3-bench", &phase_file(100));
    let policy = LabelPolicy::default();

    c.bench_function("render_body_100", |b| {
        b.iter(|| issues.iter().map(render_body).collect::<Vec<_>>())
    });
    c.bench_function("labels_100", |b| {
        b.iter(|| {
            issues
                .iter()
                .map(|i| policy.labels(i))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, parsing, rendering);
criterion_main!(benches);
