//! Report generation (CSV outputs)
//!
//! Matrices mirror the console views; values are written raw (IDR) so the
//! files load cleanly into spreadsheets.

use anyhow::Result;
use chrono::Local;
use csv::Writer;
use std::path::Path;

use siminvest_engine::record::{Quarter, RegencyRecord, Sector};
use siminvest_engine::stats::{
    capital_share_percent, capital_source_totals, global_stats, labor_ratio, quarter_totals,
    sector_totals,
};

use crate::constants;

/// Generate all CSV reports
pub fn generate_all_reports(output_dir: &Path, records: &[RegencyRecord]) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;

    generate_quarterly_matrix(output_dir, records)?;
    generate_sector_matrix(output_dir, records)?;
    generate_capital_matrix(output_dir, records)?;
    generate_region_summary(output_dir, records)?;

    println!("Laporan dibuat {}", Local::now().format("%Y-%m-%d %H:%M"));

    Ok(())
}

/// Generate quarterly_matrix.csv
fn generate_quarterly_matrix(output_dir: &Path, records: &[RegencyRecord]) -> Result<()> {
    let path = output_dir.join(constants::QUARTERLY_MATRIX_FILENAME);
    let mut wtr = Writer::from_path(&path)?;

    // Header
    wtr.write_record([
        "Kabupaten_Kota",
        "Triwulan_I",
        "Triwulan_II",
        "Triwulan_III",
        "Triwulan_IV",
        "Total",
    ])?;

    for record in records {
        let mut row = vec![record.kab_kota.clone()];
        row.extend(
            Quarter::ALL
                .iter()
                .map(|&q| format!("{:.0}", record.quarter(q))),
        );
        row.push(format!("{:.0}", record.nilai_investasi));
        wtr.write_record(&row)?;
    }

    // Grand-total row
    let mut row = vec!["TOTAL PROVINSI".to_string()];
    row.extend(
        quarter_totals(records)
            .iter()
            .map(|t| format!("{:.0}", t.value)),
    );
    row.push(format!("{:.0}", global_stats(records).total_investasi));
    wtr.write_record(&row)?;

    wtr.flush()?;
    println!("  Generated: {}", path.display());

    Ok(())
}

/// Generate sector_matrix.csv
fn generate_sector_matrix(output_dir: &Path, records: &[RegencyRecord]) -> Result<()> {
    let path = output_dir.join(constants::SECTOR_MATRIX_FILENAME);
    let mut wtr = Writer::from_path(&path)?;

    // Header
    let mut header = vec!["Kabupaten_Kota".to_string()];
    header.extend(Sector::ALL.iter().map(|s| s.label().to_string()));
    header.push("Total".to_string());
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![record.kab_kota.clone()];
        row.extend(
            Sector::ALL
                .iter()
                .map(|&s| format!("{:.0}", record.sector(s))),
        );
        row.push(format!("{:.0}", record.nilai_investasi));
        wtr.write_record(&row)?;
    }

    // Grand-total row
    let mut row = vec!["TOTAL PROVINSI".to_string()];
    row.extend(
        sector_totals(records)
            .iter()
            .map(|t| format!("{:.0}", t.value)),
    );
    row.push(format!("{:.0}", global_stats(records).total_investasi));
    wtr.write_record(&row)?;

    wtr.flush()?;
    println!("  Generated: {}", path.display());

    Ok(())
}

/// Generate capital_matrix.csv
fn generate_capital_matrix(output_dir: &Path, records: &[RegencyRecord]) -> Result<()> {
    let path = output_dir.join(constants::CAPITAL_MATRIX_FILENAME);
    let mut wtr = Writer::from_path(&path)?;

    // Header
    wtr.write_record(["Kabupaten_Kota", "PMA", "PMDN", "Total", "PMA_Persen"])?;

    for record in records {
        // Share of this region's total investment; blank when indeterminate
        let share = capital_share_percent(record.pma, record.nilai_investasi)
            .map(|pct| format!("{:.1}", pct))
            .unwrap_or_default();

        wtr.write_record([
            record.kab_kota.as_str(),
            &format!("{:.0}", record.pma),
            &format!("{:.0}", record.pmdn),
            &format!("{:.0}", record.nilai_investasi),
            &share,
        ])?;
    }

    // Grand-total row
    let totals = capital_source_totals(records);
    let share = capital_share_percent(totals.pma, totals.total)
        .map(|pct| format!("{:.1}", pct))
        .unwrap_or_default();
    wtr.write_record([
        "TOTAL PROVINSI",
        &format!("{:.0}", totals.pma),
        &format!("{:.0}", totals.pmdn),
        &format!("{:.0}", totals.total),
        &share,
    ])?;

    wtr.flush()?;
    println!("  Generated: {}", path.display());

    Ok(())
}

/// Generate region_summary.csv
fn generate_region_summary(output_dir: &Path, records: &[RegencyRecord]) -> Result<()> {
    let path = output_dir.join(constants::REGION_SUMMARY_FILENAME);
    let mut wtr = Writer::from_path(&path)?;

    // Header
    wtr.write_record([
        "No",
        "Kabupaten_Kota",
        "Nilai_Investasi",
        "PMA",
        "PMDN",
        "TKA",
        "TKI",
        "Jumlah_Proyek",
        "Rasio_TKI_TKA",
    ])?;

    for record in records {
        wtr.write_record([
            &record.no.to_string(),
            record.kab_kota.as_str(),
            &format!("{:.0}", record.nilai_investasi),
            &format!("{:.0}", record.pma),
            &format!("{:.0}", record.pmdn),
            &record.tka.to_string(),
            &record.tki.to_string(),
            &record.jumlah_proyek.to_string(),
            &labor_ratio(record.tki, record.tka).to_string(),
        ])?;
    }

    // Grand-total row
    let stats = global_stats(records);
    let capital = capital_source_totals(records);
    wtr.write_record([
        "",
        "TOTAL PROVINSI",
        &format!("{:.0}", stats.total_investasi),
        &format!("{:.0}", capital.pma),
        &format!("{:.0}", capital.pmdn),
        &stats.total_tka.to_string(),
        &stats.total_tki.to_string(),
        &stats.total_proyek.to_string(),
        &labor_ratio(stats.total_tki, stats.total_tka).to_string(),
    ])?;

    wtr.flush()?;
    println!("  Generated: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    #[test]
    fn test_reports_write_all_files_with_totals() {
        let dir = std::env::temp_dir().join("siminvest-reports-test");
        let _ = std::fs::remove_dir_all(&dir);

        generate_all_reports(&dir, &seed_records()).unwrap();

        for filename in [
            constants::QUARTERLY_MATRIX_FILENAME,
            constants::SECTOR_MATRIX_FILENAME,
            constants::CAPITAL_MATRIX_FILENAME,
            constants::REGION_SUMMARY_FILENAME,
        ] {
            let content = std::fs::read_to_string(dir.join(filename)).unwrap();
            // Header + 10 regions + grand total
            assert_eq!(content.lines().count(), 12, "{}", filename);
            assert!(content.contains("TOTAL PROVINSI"), "{}", filename);
        }
    }

    #[test]
    fn test_capital_matrix_blank_share_on_zero_total() {
        let dir = std::env::temp_dir().join("siminvest-reports-zero-test");
        let _ = std::fs::remove_dir_all(&dir);

        let mut record = seed_records().remove(9);
        record.nilai_investasi = 0.0;
        record.pma = 0.0;
        record.pmdn = 0.0;

        generate_all_reports(&dir, &[record]).unwrap();

        let content =
            std::fs::read_to_string(dir.join(constants::CAPITAL_MATRIX_FILENAME)).unwrap();
        let row = content.lines().nth(1).unwrap();
        // Trailing share column is empty, not NaN
        assert!(row.ends_with(",0,"), "{}", row);
    }
}
