//! Shareable summary text for an estimate.
//!
//! The text uses WhatsApp-style emphasis (`*bold*`) and is a pure function
//! of the estimate, its totals and the date stamp.

use chrono::NaiveDate;

use super::format::{
    format_currency, format_date, format_decimal, format_dimension, format_quantity,
};
use crate::config::{AREA_FRACTION_DIGITS, DIVIDER};
use crate::model::{CuttingItem, Estimate, EstimateTotals, MaterialItem};
use crate::pricing::{material_total, price_cutting_item};

/// Line-oriented text builder for the summary.
#[derive(Debug, Default)]
pub struct SummaryWriter {
    lines: Vec<String>,
}

impl SummaryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a plain line.
    pub fn line(&mut self, content: impl Into<String>) {
        self.lines.push(content.into());
    }

    /// Write an emphasized line.
    pub fn bold(&mut self, content: &str) {
        self.lines.push(format!("*{}*", content));
    }

    /// Write an indented detail line under a row title.
    pub fn detail(&mut self, content: &str) {
        self.lines.push(format!("   {}", content));
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Write a divider.
    pub fn divider(&mut self) {
        self.lines.push(DIVIDER.to_string());
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines with `\n` (no trailing newline).
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Generate the summary text.
pub fn generate_summary(estimate: &Estimate, totals: &EstimateTotals, date: NaiveDate) -> String {
    let mut writer = SummaryWriter::new();

    write_header(&mut writer, estimate, date);

    if !estimate.cutting_items.is_empty() {
        write_cutting_section(&mut writer, &estimate.cutting_items, totals);
    }

    if !estimate.material_items.is_empty() {
        write_material_section(&mut writer, &estimate.material_items, totals);
    }

    write_totals(&mut writer, totals);

    tracing::trace!(lines = writer.len(), "summary generated");
    writer.finish()
}

/// Title, date and customer block.
fn write_header(writer: &mut SummaryWriter, estimate: &Estimate, date: NaiveDate) {
    writer.bold("ESTIMASI CUTTING");
    writer.line(format!("Tanggal: {}", format_date(date)));
    writer.blank();

    writer.line(estimate.customer.display_name());
    writer.line(estimate.customer.display_contact());
    writer.blank();
}

/// Cutting rows with their size and price breakdown.
fn write_cutting_section(
    writer: &mut SummaryWriter,
    items: &[CuttingItem],
    totals: &EstimateTotals,
) {
    writer.bold("JASA CUTTING");

    for (idx, item) in items.iter().enumerate() {
        writer.bold(&format!(
            "{}. {} {}",
            idx + 1,
            item.display_label(),
            item.mode()
        ));

        let quantity = format_quantity(item.quantity);
        if item.is_lumpsum {
            writer.detail(&format!("Total Ukuran (Qty: {}) : {} Ls", quantity, quantity));
            writer.detail(&format!("Harga: {} (Borongan)", format_currency(item.unit_price)));
        } else {
            writer.detail(&format!(
                "Ukuran : {} * {} = {} m²",
                format_dimension(item.length),
                format_dimension(item.width),
                format_decimal(item.piece_area(), AREA_FRACTION_DIGITS)
            ));
            writer.detail(&format!(
                "Total Ukuran (Qty: {}) : {} m²",
                quantity,
                format_decimal(item.total_area(), AREA_FRACTION_DIGITS)
            ));
            writer.detail(&format!("Harga: {} /m²", format_currency(item.unit_price)));
        }

        if item.has_discount() {
            let mut discounts = Vec::new();
            if item.discount_percent > 0.0 {
                discounts.push(format!("{}%", format_quantity(item.discount_percent)));
            }
            if item.discount_flat > 0.0 {
                discounts.push(format_currency(item.discount_flat));
            }
            writer.detail(&format!("Disc : {}", discounts.join(" + ")));
        }

        writer.detail(&format!("Subtotal: {}", format_currency(price_cutting_item(item))));
        writer.blank();
    }

    writer.line(format!(
        "  *> Subtotal Jasa: {}*",
        format_currency(totals.cutting_subtotal)
    ));
    writer.blank();
}

/// Material rows with unit price and line total.
fn write_material_section(
    writer: &mut SummaryWriter,
    items: &[MaterialItem],
    totals: &EstimateTotals,
) {
    writer.bold("MATERIAL");

    for (idx, item) in items.iter().enumerate() {
        writer.line(format!(
            "{}. {} | Qty: {}",
            idx + 1,
            item.display_name(),
            format_quantity(item.quantity)
        ));
        writer.detail(&format!(
            "@ {} = {}",
            format_currency(item.unit_price),
            format_currency(material_total(item))
        ));
    }

    writer.blank();
    writer.detail(&format!(
        "*> Subtotal Material: {}*",
        format_currency(totals.material_subtotal)
    ));
    writer.blank();
}

/// Gross total, rounding discount and grand total.
fn write_totals(writer: &mut SummaryWriter, totals: &EstimateTotals) {
    writer.divider();
    if totals.has_rounding_discount() {
        writer.bold(&format!("Subtotal: {}", format_currency(totals.gross_total)));
        writer.bold(&format!(
            "Disc Pembulatan: - {}",
            format_currency(totals.rounding_discount)
        ));
        writer.divider();
    }
    writer.bold(&format!("GRAND TOTAL: {}", format_currency(totals.grand_total)));
    writer.divider();
}
