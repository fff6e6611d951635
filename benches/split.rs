//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use criterion::{Criterion, black_box};
use rangesplit::RangeSplit;

pub fn bench_overlapping(c: &mut Criterion) {
    c.bench_function("split 1000 overlapping ranges", |b| {
        b.iter(|| {
            let mut split: RangeSplit = RangeSplit::new();
            for i in 0..1000u64 {
                let base = ((i * 7) % 1000) as i64;
                split
                    .add_range(black_box(base), black_box(base + 20), i, [i % 16])
                    .unwrap();
            }
            black_box(split.build().len());
        });
    });
}

pub fn bench_nested(c: &mut Criterion) {
    c.bench_function("split 500 nested ranges", |b| {
        b.iter(|| {
            let mut split: RangeSplit = RangeSplit::new();
            for i in 0..500u64 {
                let depth = i as i64;
                split
                    .add_range(black_box(depth), black_box(1000 - depth), i, [i])
                    .unwrap();
            }
            black_box(split.build().len());
        });
    });
}

pub fn bench_sparse_points(c: &mut Criterion) {
    c.bench_function("split 1000 single points in one span", |b| {
        b.iter(|| {
            let mut split: RangeSplit = RangeSplit::new();
            split.add_range(0, 100_000, 0, [0]).unwrap();
            for i in 1..=1000u64 {
                let pos = (i * 100) as i64;
                split.add_range(black_box(pos), black_box(pos), i, [i]).unwrap();
            }
            black_box(split.build().len());
        });
    });
}

pub fn bench_touching(c: &mut Criterion) {
    c.bench_function("split 1000 touching ranges", |b| {
        b.iter(|| {
            let mut split: RangeSplit = RangeSplit::new();
            for i in 0..1000u64 {
                let low = (i * 10) as i64;
                split
                    .add_range(black_box(low), black_box(low + 10), i, [i % 4])
                    .unwrap();
            }
            black_box(split.build().len());
        });
    });
}
