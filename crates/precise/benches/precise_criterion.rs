// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nexuscore_precise::{Precise, add, compare, div, modulo, mul, sub};

pub fn bench_add(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter(|| add(black_box("5086.58101322"), black_box("0.0190872")));
    });
}

pub fn bench_sub(c: &mut Criterion) {
    c.bench_function("sub", |b| {
        b.iter(|| sub(black_box("5086.58101322"), black_box("0.0190872")));
    });
}

pub fn bench_mul(c: &mut Criterion) {
    c.bench_function("mul", |b| {
        b.iter(|| mul(black_box("0.00012345"), black_box("64321.987")));
    });
}

pub fn bench_div_default_precision(c: &mut Criterion) {
    c.bench_function("div (18dp)", |b| {
        b.iter(|| div(black_box("1"), black_box("3"), black_box(18)));
    });
}

pub fn bench_div_high_precision(c: &mut Criterion) {
    c.bench_function("div (64dp)", |b| {
        b.iter(|| div(black_box("123456.789"), black_box("0.0007"), black_box(64)));
    });
}

pub fn bench_modulo(c: &mut Criterion) {
    c.bench_function("modulo", |b| {
        b.iter(|| modulo(black_box("123.456"), black_box("0.05")));
    });
}

pub fn bench_compare(c: &mut Criterion) {
    c.bench_function("compare", |b| {
        b.iter(|| compare(black_box("-1234.5000"), black_box("-1234.49999")));
    });
}

pub fn bench_precise_sum(c: &mut Criterion) {
    let fills: Vec<Precise> = (0..100)
        .map(|i| Precise::new_checked(format!("0.{i:03}")).unwrap())
        .collect();
    c.bench_function("Precise::sum (100 fills)", |b| {
        b.iter(|| black_box(&fills).iter().cloned().sum::<Precise>());
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_sub,
    bench_mul,
    bench_div_default_precision,
    bench_div_high_precision,
    bench_modulo,
    bench_compare,
    bench_precise_sum,
);
criterion_main!(benches);
