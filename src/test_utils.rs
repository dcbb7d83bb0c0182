// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests.

use crate::ui::data_table::{Align, CellValue, Column, TableRow};
use chrono::NaiveDate;

/// Minimal invoice record used as a table row in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: u32,
    pub number: String,
    pub client: String,
    pub amount: f64,
    pub issued: NaiveDate,
    pub paid: bool,
}

impl Invoice {
    pub fn new(id: u32, client: &str, amount: f64, issued: (i32, u32, u32), paid: bool) -> Self {
        Self {
            id,
            number: format!("INV-{id:03}"),
            client: client.to_string(),
            amount,
            issued: NaiveDate::from_ymd_opt(issued.0, issued.1, issued.2)
                .expect("fixture dates are valid"),
            paid,
        }
    }
}

impl TableRow for Invoice {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "number" => self.number.clone().into(),
            "client" => self.client.clone().into(),
            "amount" => self.amount.into(),
            "issued" => self.issued.into(),
            "paid" => self.paid.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Four invoices; two share a client and two share an amount.
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice::new(1, "Globex", 1200.0, (2024, 3, 1), true),
        Invoice::new(2, "Acme", 450.0, (2024, 1, 15), false),
        Invoice::new(3, "Initech", 1200.0, (2024, 2, 10), true),
        Invoice::new(4, "Acme", 99.9, (2024, 4, 2), false),
    ]
}

/// Columns over [`Invoice`]; `paid` is the only non-sortable one.
pub fn invoice_columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("number", "Number").sortable(),
        Column::new("client", "Client").sortable(),
        Column::new("amount", "Amount")
            .sortable()
            .align(Align::Right)
            .render(|invoice: &Invoice| format!("{:.2}", invoice.amount)),
        Column::new("issued", "Issued").sortable(),
        Column::new("paid", "Paid").align(Align::Center),
    ]
}

/// Ids of `rows`, in order.
pub fn ids<'a>(rows: impl IntoIterator<Item = &'a Invoice>) -> Vec<u32> {
    rows.into_iter().map(|invoice| invoice.id).collect()
}
