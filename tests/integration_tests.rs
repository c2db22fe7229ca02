//! Integration tests for estimate pricing and summary generation.
//!
//! Most tests check the structure of the generated text (sections, row
//! titles, totals) rather than byte-for-byte output, so that wording
//! changes inside a row don't break unrelated tests. One snapshot pins the
//! full layout.

use chrono::NaiveDate;
use cut_estimate::{
    compute_totals, generate_summary, load_estimate_file, price_cutting_item,
    summarize_estimate_file, validate_estimate, CuttingField, CuttingItem, Estimate,
    EstimateError, MaterialField, MaterialItem, MemoryClipboard, PriceList, Session,
};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::time::Instant;

const EPS: f64 = 0.001;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// Summary text with no-break spaces turned into plain spaces.
fn render(estimate: &Estimate) -> String {
    plain(&generate_summary(estimate, &compute_totals(estimate), date()))
}

fn plain(text: &str) -> String {
    text.replace('\u{a0}', " ")
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

// ==================== Summary Structure Parsing ====================

/// Generated summary split into its blocks.
#[derive(Debug)]
struct SummaryStructure {
    header: Vec<String>,
    sections: Vec<(String, Vec<String>)>,
    footer: Vec<String>,
}

impl SummaryStructure {
    /// Split on section titles (`*JASA CUTTING*`, `*MATERIAL*`) and the first divider.
    fn parse(content: &str) -> Self {
        let mut header = Vec::new();
        let mut sections: Vec<(String, Vec<String>)> = Vec::new();
        let mut footer = Vec::new();
        let mut in_footer = false;

        for line in content.lines() {
            if in_footer || line.starts_with("----") {
                in_footer = true;
                footer.push(line.to_string());
            } else if line == "*JASA CUTTING*" || line == "*MATERIAL*" {
                sections.push((line.trim_matches('*').to_string(), Vec::new()));
            } else if let Some((_, lines)) = sections.last_mut() {
                lines.push(line.to_string());
            } else {
                header.push(line.to_string());
            }
        }

        SummaryStructure {
            header,
            sections,
            footer,
        }
    }

    fn section(&self, name: &str) -> Option<&Vec<String>> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, lines)| lines)
    }

    /// Row title lines (`*1. ... m²*`) of the cutting section.
    fn cutting_titles(&self) -> Vec<&str> {
        self.section("JASA CUTTING")
            .map(|lines| {
                lines
                    .iter()
                    .filter(|l| l.starts_with('*') && !l.starts_with("*>"))
                    .map(|l| l.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ==================== Pricing scenarios ====================

#[test]
fn test_scenario_area_item() {
    let item = CuttingItem::area("", 2.0, 1.5, 1.0, 100_000.0);
    assert!(approx_eq(item.piece_area(), 3.0));
    assert!(approx_eq(price_cutting_item(&item), 300_000.0));
}

#[test]
fn test_scenario_area_item_with_discounts() {
    let item = CuttingItem::area("", 2.0, 1.5, 1.0, 100_000.0).with_discounts(10.0, 50_000.0);
    assert!(approx_eq(price_cutting_item(&item), 225_000.0));
}

#[test]
fn test_scenario_lumpsum_item() {
    let mut item = CuttingItem::lumpsum("", 3.0, 200_000.0);
    item.length = 9.0;
    item.width = 9.0;
    assert!(approx_eq(price_cutting_item(&item), 600_000.0));
}

#[test]
fn test_scenario_rounding_discount() {
    let estimate = Estimate {
        cutting_items: vec![CuttingItem::lumpsum("", 1.0, 500_000.0)],
        material_items: vec![MaterialItem::new("", 1.0, 100_000.0)],
        rounding_discount: 50_000.0,
        ..Default::default()
    };
    let totals = compute_totals(&estimate);
    assert!(approx_eq(totals.cutting_subtotal, 500_000.0));
    assert!(approx_eq(totals.material_subtotal, 100_000.0));
    assert!(approx_eq(totals.grand_total, 550_000.0));
}

#[test]
fn test_scenario_rounding_discount_exceeds_gross() {
    let estimate = Estimate {
        cutting_items: vec![CuttingItem::lumpsum("", 3.0, 200_000.0)],
        rounding_discount: 1_000_000.0,
        ..Default::default()
    };
    let totals = compute_totals(&estimate);
    assert!(approx_eq(totals.gross_total, 600_000.0));
    assert_eq!(totals.grand_total, 0.0);
    assert!(render(&estimate).contains("*GRAND TOTAL: Rp 0*"));
}

// ==================== Summary structure ====================

fn mixed_estimate() -> Estimate {
    let json = r#"{
        "customer": {"name": "Budi Sentosa", "contact_number": "08123456789"},
        "cutting_items": [
            {"label": "ACP 2D", "length": 2, "width": 1.5, "quantity": 2, "unit_price": 150000},
            {"label": "Borongan Cutting", "quantity": 1, "unit_price": "250.000",
             "discount_percent": 10, "is_lumpsum": true}
        ],
        "material_items": [
            {"name": "Plat Besi 1mm", "quantity": 2, "unit_price": 150000}
        ],
        "rounding_discount": 25000
    }"#;
    serde_json::from_str(json).expect("valid estimate")
}

#[test]
fn test_summary_sections() {
    let text = render(&mixed_estimate());
    let summary = SummaryStructure::parse(&text);

    assert_eq!(
        summary.header,
        vec![
            "*ESTIMASI CUTTING*",
            "Tanggal: 17 Okt 2026",
            "",
            "Budi Sentosa",
            "08123456789",
            "",
        ]
    );
    assert_eq!(
        summary.cutting_titles(),
        vec!["*1. ACP 2D m²*", "*2. Borongan Cutting Ls*"]
    );

    let material = summary.section("MATERIAL").expect("material section");
    assert!(material.contains(&"   *> Subtotal Material: Rp 300.000*".to_string()));

    assert_eq!(summary.footer.len(), 6);
    assert_eq!(summary.footer[1], "*Subtotal: Rp 1.425.000*");
    assert_eq!(summary.footer[4], "*GRAND TOTAL: Rp 1.400.000*");
}

#[test]
fn test_summary_snapshot() {
    let text = render(&mixed_estimate());
    insta::assert_snapshot!(text, @r"
*ESTIMASI CUTTING*
Tanggal: 17 Okt 2026

Budi Sentosa
08123456789

*JASA CUTTING*
*1. ACP 2D m²*
   Ukuran : 2.00 * 1.50 = 3 m²
   Total Ukuran (Qty: 2) : 6 m²
   Harga: Rp 150.000 /m²
   Subtotal: Rp 900.000

*2. Borongan Cutting Ls*
   Total Ukuran (Qty: 1) : 1 Ls
   Harga: Rp 250.000 (Borongan)
   Disc : 10%
   Subtotal: Rp 225.000

  *> Subtotal Jasa: Rp 1.125.000*

*MATERIAL*
1. Plat Besi 1mm | Qty: 2
   @ Rp 150.000 = Rp 300.000

   *> Subtotal Material: Rp 300.000*

--------------------------------
*Subtotal: Rp 1.425.000*
*Disc Pembulatan: - Rp 25.000*
--------------------------------
*GRAND TOTAL: Rp 1.400.000*
--------------------------------
");
}

#[test]
fn test_summary_without_sections() {
    let estimate = Estimate::default();
    let summary = SummaryStructure::parse(&render(&estimate));
    assert!(summary.sections.is_empty());
    assert_eq!(summary.header[3], "-");
    assert_eq!(summary.header[4], "-");
    assert_eq!(summary.footer.len(), 3);
}

#[test]
fn test_summary_is_deterministic() {
    let estimate = mixed_estimate();
    let first = generate_summary(&estimate, &compute_totals(&estimate), date());
    let second = generate_summary(&estimate, &compute_totals(&estimate), date());
    assert_eq!(first, second);
}

// ==================== Session workflow ====================

#[test]
fn test_session_workflow() {
    let mut session = Session::new(PriceList::builtin());
    session.set_customer_name("Sari");

    let id = session.estimate().cutting_items[0].id.clone();
    session.set_cutting_label(&id, "Acrylic 1mm - 3mm").unwrap();
    session.update_cutting_item(&id, CuttingField::Length(1.0)).unwrap();
    session.update_cutting_item(&id, CuttingField::Width(0.5)).unwrap();

    let material = session.add_material_item();
    session
        .update_material_item(&material, MaterialField::Name("Lem".into()))
        .unwrap();
    session
        .update_material_item(&material, MaterialField::UnitPrice(15_000.0))
        .unwrap();
    session.set_rounding_discount(140_000.0);

    let totals = session.totals();
    assert!(approx_eq(totals.cutting_subtotal, 125_000.0));
    assert!(approx_eq(totals.gross_total, 140_000.0));
    assert_eq!(totals.grand_total, 0.0);

    let mut clipboard = MemoryClipboard::new();
    let now = Instant::now();
    session.copy_summary(&mut clipboard, date(), now).unwrap();
    let copied = plain(clipboard.contents().expect("copied text"));
    assert!(copied.contains("*1. Acrylic 1mm - 3mm m²*"));
    assert!(copied.contains("   Ukuran : 1.00 * 0.50 = 0,5 m²"));
    assert!(copied.contains("*Disc Pembulatan: - Rp 140.000*"));
    assert!(session.is_copied(now));
}

// ==================== File loading ====================

#[test]
fn test_summarize_estimate_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "estimate.json",
        r#"{"cutting_items": [{"label": "PHG 4mm - 6mm", "length": "1.5", "width": "1", "unit_price": "900.000"}]}"#,
    );

    let text = plain(&summarize_estimate_file(&path, date()).unwrap());
    assert!(text.contains("   Ukuran : 1.50 * 1.00 = 1,5 m²"));
    assert!(text.contains("*GRAND TOTAL: Rp 1.350.000*"));
}

#[test]
fn test_summarize_rejects_invalid_estimate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "invalid.json",
        r#"{"material_items": [{"name": "Lem", "quantity": -3, "unit_price": 1000}]}"#,
    );

    let err = summarize_estimate_file(&path, date()).unwrap_err();
    assert_eq!(err.code_value(), 102);
    match err {
        EstimateError::Validation { errors } => assert_eq!(errors.len(), 1),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_summary_rounds_half_dimensions_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "strip.json",
        r#"{"cutting_items": [{"label": "Strip", "length": 1, "width": 0.125, "unit_price": 100000}]}"#,
    );

    let text = plain(&summarize_estimate_file(&path, date()).unwrap());
    assert!(text.contains("   Ukuran : 1.00 * 0.13 = 0,125 m²"));
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let empty = write_fixture(dir.path(), "empty.json", "  \n");
    assert!(matches!(
        load_estimate_file(&empty),
        Err(EstimateError::EmptyFile { .. })
    ));

    let broken = write_fixture(dir.path(), "broken.json", "{\"cutting_items\": [");
    assert!(matches!(
        load_estimate_file(&broken),
        Err(EstimateError::InvalidJson { .. })
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_estimate_file(&missing),
        Err(EstimateError::FileNotFound { .. })
    ));
}

#[test]
fn test_validation_of_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "negative.json",
        r#"{"material_items": [{"name": "Lem", "quantity": -1, "unit_price": 1000}]}"#,
    );

    let estimate = load_estimate_file(&path).unwrap();
    let validation = validate_estimate(&estimate);
    assert!(!validation.passed);
    assert_eq!(validation.errors.len(), 1);
}
