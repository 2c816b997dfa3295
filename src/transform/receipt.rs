//! Fixed-width receipt rendering.

use std::str::FromStr;

use crate::error::{TextSiftError, TextSiftResult};

const WIDTH: usize = 39;
const ITEM_COL: usize = 20;
const QTY_COL: usize = 5;
const PRICE_COL: usize = 14;

/// One purchased item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub item: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl ReceiptLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Parses `NAME:PRICE:QTY`. The name may itself contain colons.
impl FromStr for ReceiptLine {
    type Err = TextSiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TextSiftError::InvalidInput {
            parameter: "item".to_string(),
            reason: format!("{reason} in '{s}' (expected NAME:PRICE:QTY)"),
        };

        let mut parts = s.rsplitn(3, ':');
        let quantity = parts.next().ok_or_else(|| invalid("missing quantity"))?;
        let price = parts.next().ok_or_else(|| invalid("missing price"))?;
        let item = parts.next().ok_or_else(|| invalid("missing item name"))?;

        Ok(Self {
            item: item.to_string(),
            unit_price: price.trim().parse().map_err(|_| invalid("bad price"))?,
            quantity: quantity.trim().parse().map_err(|_| invalid("bad quantity"))?,
        })
    }
}

/// Renders a receipt from parallel item, unit price, and quantity lists.
///
/// The three lists must have the same length.
pub fn format_receipt<S: AsRef<str>>(
    items: &[S],
    prices: &[f64],
    quantities: &[u32],
) -> TextSiftResult<String> {
    if items.len() != prices.len() || items.len() != quantities.len() {
        return Err(TextSiftError::InvalidInput {
            parameter: "items".to_string(),
            reason: format!(
                "{} items, {} prices and {} quantities",
                items.len(),
                prices.len(),
                quantities.len()
            ),
        });
    }

    let lines: Vec<ReceiptLine> = items
        .iter()
        .zip(prices)
        .zip(quantities)
        .map(|((item, &unit_price), &quantity)| ReceiptLine {
            item: item.as_ref().to_string(),
            unit_price,
            quantity,
        })
        .collect();

    Ok(render_receipt(&lines))
}

/// Renders a receipt table with a grand total row.
pub fn render_receipt(lines: &[ReceiptLine]) -> String {
    let rule = "=".repeat(WIDTH);
    let mut out = vec![
        rule.clone(),
        format!("{:<ITEM_COL$}{:^QTY_COL$}{:>PRICE_COL$}", "Item", "Qty", "Price"),
        rule.clone(),
    ];

    let mut total = 0.0;
    for line in lines {
        let line_total = line.line_total();
        total += line_total;
        out.push(format!(
            "{:<ITEM_COL$}{:^QTY_COL$}{:>PRICE_COL$}",
            line.item,
            line.quantity,
            money(line_total)
        ));
    }

    out.push(rule.clone());
    out.push(format!(
        "{:<ITEM_COL$}{:^QTY_COL$}{:>PRICE_COL$}",
        "TOTAL",
        "",
        money(total)
    ));
    out.push(rule);
    out.join("\n")
}

fn money(amount: f64) -> String {
    format!("$ {amount:6.2}")
}
