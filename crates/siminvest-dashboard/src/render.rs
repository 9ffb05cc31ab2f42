//! Console rendering of the dashboard views
//!
//! Presentation only: every number arrives pre-shaped in an engine view
//! model and is formatted with the shared formatter. Degenerate values
//! render as placeholders, never as NaN or infinity.

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use siminvest_engine::format::{format_count, format_idr_full, format_idr_short, format_percent};
use siminvest_engine::record::{RegencyRecord, Sector};
use siminvest_engine::views::{
    capital_view, dashboard_summary, quarterly_view, regency_detail, sector_view,
};

use crate::constants;

fn banner(title: &str) {
    println!("\n============================================================");
    println!("{:^60}", title);
    println!("============================================================\n");
}

fn share_text(share: Option<f64>) -> String {
    match share {
        Some(pct) => format_percent(pct, 1),
        None => constants::SHARE_PLACEHOLDER.to_string(),
    }
}

/// Province-wide summary: stat cards, regional ranking, sector proportions
pub fn print_dashboard(records: &[RegencyRecord], province: &str, year: u16, custom_data: bool) {
    let view = dashboard_summary(records, constants::RADAR_FULL_MARK);

    banner(&format!("RINGKASAN INVESTASI {}", year));
    if custom_data {
        println!("Provinsi {} [Data Impor]\n", province);
    } else {
        println!("Provinsi {}\n", province);
    }

    println!(
        "  Total Realisasi:     {}",
        format_idr_short(view.stats.total_investasi)
    );
    println!(
        "  Jumlah Proyek:       {}",
        format_count(view.stats.total_proyek)
    );
    println!("  Serapan TKI:         {}", format_count(view.stats.total_tki));
    println!("  Tenaga Kerja Asing:  {}", format_count(view.stats.total_tka));

    println!("\nINVESTASI PER WILAYAH (miliar Rp):");
    for entry in &view.regency_ranking {
        println!("  {:<16} {:>10.2}", entry.name, entry.value);
    }

    println!(
        "\nPROPORSI SEKTOR UTAMA (miliar Rp, skala radar {:.0}):",
        constants::RADAR_FULL_MARK
    );
    for point in &view.sector_radar {
        println!("  {:<16} {:>10.2}", point.label, point.value);
    }
}

#[derive(Tabled)]
struct QuarterRow {
    #[tabled(rename = "Kabupaten / Kota")]
    kab_kota: String,
    #[tabled(rename = "Triwulan I")]
    tw1: String,
    #[tabled(rename = "Triwulan II")]
    tw2: String,
    #[tabled(rename = "Triwulan III")]
    tw3: String,
    #[tabled(rename = "Triwulan IV")]
    tw4: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Quarterly realization: stat cards, growth series, matrix with totals
pub fn print_quarterly(records: &[RegencyRecord]) {
    let view = quarterly_view(records);

    banner("REALISASI TRIWULANAN");
    for card in &view.cards {
        println!("  {:<8} {}", card.quarter.label(), format_idr_short(card.value));
    }

    println!("\nPERBANDINGAN PERTUMBUHAN ANTAR WILAYAH (miliar Rp):");
    for series in &view.series {
        println!(
            "  {:<16} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            series.name,
            series.quarters[0],
            series.quarters[1],
            series.quarters[2],
            series.quarters[3]
        );
    }

    let mut rows: Vec<QuarterRow> = view
        .matrix
        .iter()
        .map(|row| QuarterRow {
            kab_kota: row.kab_kota.clone(),
            tw1: format_idr_short(row.quarters[0]),
            tw2: format_idr_short(row.quarters[1]),
            tw3: format_idr_short(row.quarters[2]),
            tw4: format_idr_short(row.quarters[3]),
            total: format_idr_short(row.total),
        })
        .collect();
    rows.push(QuarterRow {
        kab_kota: "TOTAL PROVINSI".to_string(),
        tw1: format_idr_short(view.totals.quarters[0]),
        tw2: format_idr_short(view.totals.quarters[1]),
        tw3: format_idr_short(view.totals.quarters[2]),
        tw4: format_idr_short(view.totals.quarters[3]),
        total: format_idr_short(view.totals.total),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("\nMATRIKS REALISASI TRIWULANAN");
    println!("{}", table);
}

/// Sector composition: top sectors, focused breakdown, full matrix
pub fn print_sectors(records: &[RegencyRecord], focus: Sector) {
    let view = sector_view(records, focus);

    banner("KOMPOSISI SEKTOR");
    println!("SEKTOR TERATAS:");
    for total in view.ranked.iter().take(constants::TOP_SECTOR_CARDS) {
        println!("  {:<16} {}", total.sector.label(), format_idr_short(total.value));
    }

    println!("\nFOKUS ANALISIS SEKTOR: {}", view.focus.label());
    for entry in &view.focus_breakdown {
        println!("  {:<16} {:>10.2} miliar", entry.name, entry.value);
    }

    let mut builder = Builder::default();
    let mut header = vec!["Kabupaten / Kota".to_string()];
    header.extend(Sector::ALL.iter().map(|s| s.label().to_string()));
    header.push("Total".to_string());
    builder.push_record(header);

    for row in &view.matrix {
        let mut cells = vec![row.kab_kota.clone()];
        cells.extend(row.values.iter().map(|v| format_idr_short(*v)));
        cells.push(format_idr_short(row.total));
        builder.push_record(cells);
    }

    let mut cells = vec!["TOTAL PROVINSI".to_string()];
    cells.extend(view.totals.values.iter().map(|v| format_idr_short(*v)));
    cells.push(format_idr_short(view.totals.total));
    builder.push_record(cells);

    let mut table = builder.build();
    table.with(Style::psql());
    println!("\nMATRIKS REALISASI PER SEKTOR");
    println!("{}", table);
}

#[derive(Tabled)]
struct CapitalRow {
    #[tabled(rename = "Kabupaten / Kota")]
    kab_kota: String,
    #[tabled(rename = "PMA (Asing)")]
    pma: String,
    #[tabled(rename = "PMDN (Lokal)")]
    pmdn: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "% PMA")]
    pma_share: String,
}

/// Capital sources: PMA/PMDN totals, shares, per-region comparison, table
pub fn print_capital(records: &[RegencyRecord]) {
    let view = capital_view(records);

    banner("SUMBER MODAL PMA / PMDN");
    println!(
        "  Total PMA (Asing):   {:<16} {} dari total investasi",
        format_idr_short(view.totals.pma),
        share_text(view.pma_share)
    );
    println!(
        "  Total PMDN (Lokal):  {:<16} {} dari total investasi",
        format_idr_short(view.totals.pmdn),
        share_text(view.pmdn_share)
    );
    println!(
        "  Total Investasi:     {}",
        format_idr_short(view.totals.total)
    );

    println!("\nPERBANDINGAN PER WILAYAH (miliar Rp):");
    for series in &view.series {
        println!(
            "  {:<16} PMA {:>9.2}   PMDN {:>9.2}",
            series.name, series.pma, series.pmdn
        );
    }

    let mut rows: Vec<CapitalRow> = view
        .matrix
        .iter()
        .map(|row| CapitalRow {
            kab_kota: row.kab_kota.clone(),
            pma: format_idr_short(row.pma),
            pmdn: format_idr_short(row.pmdn),
            total: format_idr_short(row.total),
            pma_share: share_text(row.pma_share),
        })
        .collect();
    rows.push(CapitalRow {
        kab_kota: "TOTAL PROVINSI".to_string(),
        pma: format_idr_short(view.totals.pma),
        pmdn: format_idr_short(view.totals.pmdn),
        total: format_idr_short(view.totals.total),
        pma_share: share_text(view.pma_share),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("\nTABEL RINCIAN PMA & PMDN");
    println!("{}", table);
}

/// Single-region profile
pub fn print_regency(record: &RegencyRecord, year: u16) {
    let detail = regency_detail(record);

    banner(&format!("DETAIL: {}", detail.kab_kota.to_uppercase()));
    println!("Profil realisasi investasi {}\n", year);
    println!("  Total Realisasi: {}", format_idr_full(detail.total));

    println!("\nDISTRIBUSI SEKTOR:");
    for total in &detail.sector_breakdown {
        println!("  {:<16} {}", total.sector.label(), format_idr_short(total.value));
    }

    println!("\nREALISASI PER TRIWULAN:");
    for quarter in &detail.quarter_series {
        println!(
            "  {:<8} {}",
            quarter.quarter.label(),
            format_idr_short(quarter.value)
        );
    }

    println!("\nSUMBER MODAL:");
    println!("  PMA:   {}", format_idr_short(detail.pma));
    println!("  PMDN:  {}", format_idr_short(detail.pmdn));

    println!("\nTENAGA KERJA & PROYEK:");
    println!("  Proyek:          {}", format_count(detail.jumlah_proyek));
    println!("  TKI:             {}", format_count(detail.tki));
    println!("  TKA:             {}", format_count(detail.tka));
    println!("  Rasio TKI/TKA:   {}:1", detail.labor);

    println!("\nDETAIL NILAI PER SEKTOR:");
    for total in &detail.all_sectors {
        println!("  {:<16} {}", total.sector.label(), format_idr_full(total.value));
    }
}
