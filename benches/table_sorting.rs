// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use invoice_kit::ui::data_table::{
    sorted_view, CellValue, Column, DataTable, SortDirective, TableRow,
};
use std::hint::black_box;

const ROW_COUNTS: [u32; 3] = [100, 1_000, 10_000];

struct Invoice {
    id: u32,
    client: String,
    amount: f64,
}

impl TableRow for Invoice {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "client" => self.client.as_str().into(),
            "amount" => self.amount.into(),
            _ => CellValue::Empty,
        }
    }
}

fn invoices(count: u32) -> Vec<Invoice> {
    (0..count)
        .map(|id| Invoice {
            id,
            // Repeating clients and amounts exercise the tie path
            client: format!("Client {}", id % 97),
            amount: f64::from((id * 7919) % 5000) / 4.0,
        })
        .collect()
}

fn sorting_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_sorting");

    for count in ROW_COUNTS {
        let rows = invoices(count);

        group.bench_with_input(BenchmarkId::new("amount_desc", count), &rows, |b, rows| {
            let directive = SortDirective::descending("amount");
            b.iter(|| black_box(sorted_view(rows, Some(&directive))));
        });

        group.bench_with_input(BenchmarkId::new("client_asc", count), &rows, |b, rows| {
            let directive = SortDirective::ascending("client");
            b.iter(|| black_box(sorted_view(rows, Some(&directive))));
        });
    }

    group.finish();
}

fn selection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_selection");

    for count in ROW_COUNTS {
        let columns = vec![
            Column::new("client", "Client").sortable(),
            Column::new("amount", "Amount").sortable(),
        ];
        let mut table = DataTable::new(columns, invoices(count)).selectable(true);

        group.bench_function(BenchmarkId::new("toggle_select_all", count), |b| {
            b.iter(|| {
                table.toggle_select_all();
                black_box(table.select_all_state())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, sorting_benchmark, selection_benchmark);
criterion_main!(benches);
