//! Per-view data assembly
//!
//! One pure function per dashboard view, combining aggregation and scaling
//! into the exact shape that view consumes. Same records and selection in,
//! identical view model out; presentation never re-derives anything.

use crate::format::BILLION;
use crate::record::{Quarter, RegencyRecord, Sector};
use crate::stats::{
    CapitalTotals, GlobalStats, LaborRatio, QuarterTotal, RankedValue, SectorTotal,
    capital_share_percent, capital_source_totals, global_stats, labor_ratio, quarter_totals,
    rank_by_investment, ranked_sector_totals, sector_breakdown, sector_totals,
};

/// One spoke of the sector radar chart. `full_mark` is the fixed chart
/// ceiling (a configured constant, never derived from the data).
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    pub label: &'static str,
    /// Sector total in billions
    pub value: f64,
    pub full_mark: f64,
}

/// Dashboard landing view: stat cards, regional ranking, sector radar
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub stats: GlobalStats,
    /// Investment per region in billions, ranked descending
    pub regency_ranking: Vec<RankedValue>,
    /// Sector totals in billions, canonical sector order
    pub sector_radar: Vec<RadarPoint>,
}

pub fn dashboard_summary(records: &[RegencyRecord], radar_full_mark: f64) -> DashboardSummary {
    DashboardSummary {
        stats: global_stats(records),
        regency_ranking: rank_by_investment(records, BILLION),
        sector_radar: sector_totals(records)
            .into_iter()
            .map(|t| RadarPoint {
                label: t.sector.label(),
                value: t.value / BILLION,
                full_mark: radar_full_mark,
            })
            .collect(),
    }
}

/// One region's quarter series for the grouped bar chart (billions)
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterSeries {
    pub name: String,
    pub quarters: [f64; 4],
}

/// One region's row in the quarterly matrix (raw IDR)
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterMatrixRow {
    pub kab_kota: String,
    pub quarters: [f64; 4],
    pub total: f64,
}

/// Grand-total matrix row: per-quarter sums plus the investment total
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterTotalsRow {
    pub quarters: [f64; 4],
    pub total: f64,
}

/// Quarterly realization view
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyView {
    /// Stat cards, TW I..TW IV order (raw IDR)
    pub cards: Vec<QuarterTotal>,
    pub series: Vec<QuarterSeries>,
    pub matrix: Vec<QuarterMatrixRow>,
    pub totals: QuarterTotalsRow,
}

pub fn quarterly_view(records: &[RegencyRecord]) -> QuarterlyView {
    QuarterlyView {
        cards: quarter_totals(records),
        series: records
            .iter()
            .map(|r| QuarterSeries {
                name: r.kab_kota.clone(),
                quarters: Quarter::ALL.map(|q| r.quarter(q) / BILLION),
            })
            .collect(),
        matrix: records
            .iter()
            .map(|r| QuarterMatrixRow {
                kab_kota: r.kab_kota.clone(),
                quarters: Quarter::ALL.map(|q| r.quarter(q)),
                total: r.nilai_investasi,
            })
            .collect(),
        totals: QuarterTotalsRow {
            quarters: Quarter::ALL.map(|q| records.iter().map(|r| r.quarter(q)).sum()),
            total: records.iter().map(|r| r.nilai_investasi).sum(),
        },
    }
}

/// One region's stacked sector series (billions, canonical sector order)
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSeries {
    pub name: String,
    pub values: [f64; 9],
}

/// One region's row in the sector matrix (raw IDR, canonical order)
#[derive(Debug, Clone, PartialEq)]
pub struct SectorMatrixRow {
    pub kab_kota: String,
    pub values: [f64; 9],
    pub total: f64,
}

/// Grand-total matrix row: per-sector sums plus the investment total
#[derive(Debug, Clone, PartialEq)]
pub struct SectorTotalsRow {
    pub values: [f64; 9],
    pub total: f64,
}

/// Sector composition view. `focus` is caller-held selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorView {
    /// Sector totals ranked descending (summary cards take the top N)
    pub ranked: Vec<SectorTotal>,
    pub series: Vec<SectorSeries>,
    pub focus: Sector,
    /// The focused sector per region in billions, ranked descending
    pub focus_breakdown: Vec<RankedValue>,
    pub matrix: Vec<SectorMatrixRow>,
    pub totals: SectorTotalsRow,
}

pub fn sector_view(records: &[RegencyRecord], focus: Sector) -> SectorView {
    let mut focus_breakdown: Vec<RankedValue> = records
        .iter()
        .map(|r| RankedValue {
            name: r.kab_kota.clone(),
            value: r.sector(focus) / BILLION,
        })
        .collect();
    focus_breakdown.sort_by(|a, b| b.value.total_cmp(&a.value));

    SectorView {
        ranked: ranked_sector_totals(records),
        series: records
            .iter()
            .map(|r| SectorSeries {
                name: r.kab_kota.clone(),
                values: Sector::ALL.map(|s| r.sector(s) / BILLION),
            })
            .collect(),
        focus,
        focus_breakdown,
        matrix: records
            .iter()
            .map(|r| SectorMatrixRow {
                kab_kota: r.kab_kota.clone(),
                values: Sector::ALL.map(|s| r.sector(s)),
                total: r.nilai_investasi,
            })
            .collect(),
        totals: SectorTotalsRow {
            values: Sector::ALL.map(|s| records.iter().map(|r| r.sector(s)).sum()),
            total: records.iter().map(|r| r.nilai_investasi).sum(),
        },
    }
}

/// One region's PMA/PMDN pair for the grouped bar chart (billions)
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalSeries {
    pub name: String,
    pub pma: f64,
    pub pmdn: f64,
}

/// One region's row in the capital-source table (raw IDR).
/// `pma_share` is PMA as a percent of that region's total investment,
/// `None` when the total is zero (rendered as a placeholder).
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalMatrixRow {
    pub kab_kota: String,
    pub pma: f64,
    pub pmdn: f64,
    pub total: f64,
    pub pma_share: Option<f64>,
}

/// PMA/PMDN comparison view
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalView {
    pub totals: CapitalTotals,
    /// Province-wide shares of total investment; `None` on a zero total
    pub pma_share: Option<f64>,
    pub pmdn_share: Option<f64>,
    /// Per-region series sorted descending by `pma + pmdn`
    pub series: Vec<CapitalSeries>,
    pub matrix: Vec<CapitalMatrixRow>,
}

pub fn capital_view(records: &[RegencyRecord]) -> CapitalView {
    let totals = capital_source_totals(records);

    let mut series: Vec<CapitalSeries> = records
        .iter()
        .map(|r| CapitalSeries {
            name: r.kab_kota.clone(),
            pma: r.pma / BILLION,
            pmdn: r.pmdn / BILLION,
        })
        .collect();
    series.sort_by(|a, b| (b.pma + b.pmdn).total_cmp(&(a.pma + a.pmdn)));

    CapitalView {
        totals,
        pma_share: capital_share_percent(totals.pma, totals.total).ok(),
        pmdn_share: capital_share_percent(totals.pmdn, totals.total).ok(),
        series,
        matrix: records
            .iter()
            .map(|r| CapitalMatrixRow {
                kab_kota: r.kab_kota.clone(),
                pma: r.pma,
                pmdn: r.pmdn,
                total: r.nilai_investasi,
                pma_share: capital_share_percent(r.pma, r.nilai_investasi).ok(),
            })
            .collect(),
    }
}

/// Single-region profile view
#[derive(Debug, Clone, PartialEq)]
pub struct RegencyDetail {
    pub kab_kota: String,
    pub total: f64,
    /// Sectors with realized value, ranked descending (raw IDR)
    pub sector_breakdown: Vec<SectorTotal>,
    /// Quarter values in chronological order (raw IDR)
    pub quarter_series: Vec<QuarterTotal>,
    pub pma: f64,
    pub pmdn: f64,
    pub labor: LaborRatio,
    pub tki: u64,
    pub tka: u64,
    pub jumlah_proyek: u64,
    /// Every sector in canonical order, zeros included (detail grid)
    pub all_sectors: Vec<SectorTotal>,
}

pub fn regency_detail(record: &RegencyRecord) -> RegencyDetail {
    RegencyDetail {
        kab_kota: record.kab_kota.clone(),
        total: record.nilai_investasi,
        sector_breakdown: sector_breakdown(record),
        quarter_series: Quarter::ALL
            .into_iter()
            .map(|quarter| QuarterTotal {
                quarter,
                value: record.quarter(quarter),
            })
            .collect(),
        pma: record.pma,
        pmdn: record.pmdn,
        labor: labor_ratio(record.tki, record.tka),
        tki: record.tki,
        tka: record.tka,
        jumlah_proyek: record.jumlah_proyek,
        all_sectors: Sector::ALL
            .into_iter()
            .map(|sector| SectorTotal {
                sector,
                value: record.sector(sector),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_record;

    fn sample_records() -> Vec<RegencyRecord> {
        let mut a = test_record("Kota Mataram");
        a.nilai_investasi = 5e9;
        a.esdm = 1e9;
        a.pariwisata = 3e9;
        a.lainnya = 1e9;
        a.tw1 = 1e9;
        a.tw2 = 1e9;
        a.tw3 = 2e9;
        a.tw4 = 1e9;
        a.pma = 3e9;
        a.pmdn = 2e9;
        a.tka = 2;
        a.tki = 100;
        a.jumlah_proyek = 3;

        let mut b = test_record("Sumbawa");
        b.nilai_investasi = 1e10;
        b.pertanian = 1e10;
        b.tw1 = 4e9;
        b.tw2 = 6e9;
        b.pmdn = 1e10;
        b.tki = 50;
        b.jumlah_proyek = 1;

        vec![a, b]
    }

    #[test]
    fn test_dashboard_summary_scales_and_ranks() {
        let summary = dashboard_summary(&sample_records(), 150.0);
        assert_eq!(summary.stats.total_investasi, 1.5e10);
        assert_eq!(summary.regency_ranking[0].name, "Sumbawa");
        assert_eq!(summary.regency_ranking[0].value, 10.0);

        // Radar stays in canonical sector order with the fixed ceiling
        assert_eq!(summary.sector_radar[0].label, "ESDM");
        assert_eq!(summary.sector_radar[0].value, 1.0);
        assert!(summary.sector_radar.iter().all(|p| p.full_mark == 150.0));
    }

    #[test]
    fn test_quarterly_view_totals_row() {
        let view = quarterly_view(&sample_records());
        assert_eq!(view.totals.quarters, [5e9, 7e9, 2e9, 1e9]);
        assert_eq!(view.totals.total, 1.5e10);
        assert_eq!(view.matrix[0].kab_kota, "Kota Mataram");
        assert_eq!(view.series[1].quarters, [4.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sector_view_focus_breakdown() {
        let view = sector_view(&sample_records(), Sector::Pariwisata);
        assert_eq!(view.focus, Sector::Pariwisata);
        assert_eq!(view.focus_breakdown[0].name, "Kota Mataram");
        assert_eq!(view.focus_breakdown[0].value, 3.0);
        // Pertanian dominates the ranked cards
        assert_eq!(view.ranked[0].sector, Sector::Pertanian);
        assert_eq!(view.totals.total, 1.5e10);
    }

    #[test]
    fn test_capital_view_shares_and_ordering() {
        let view = capital_view(&sample_records());
        assert_eq!(view.totals.pma, 3e9);
        assert_eq!(view.totals.total, 1.5e10);
        assert_eq!(view.pma_share, Some(20.0));
        // Sorted by combined capital: Sumbawa (10) before Mataram (5)
        assert_eq!(view.series[0].name, "Sumbawa");
        // Matrix stays in input order
        assert_eq!(view.matrix[0].kab_kota, "Kota Mataram");
        assert_eq!(view.matrix[0].pma_share, Some(60.0));
    }

    #[test]
    fn test_capital_view_zero_total_has_no_share() {
        let view = capital_view(&[test_record("Kosong")]);
        assert_eq!(view.pma_share, None);
        assert_eq!(view.matrix[0].pma_share, None);
    }

    #[test]
    fn test_regency_detail_shapes() {
        let records = sample_records();
        let detail = regency_detail(&records[0]);
        assert_eq!(detail.kab_kota, "Kota Mataram");
        // Filtered breakdown: pariwisata > esdm == lainnya, zeros dropped
        assert_eq!(detail.sector_breakdown.len(), 3);
        assert_eq!(detail.sector_breakdown[0].sector, Sector::Pariwisata);
        // Quarter series keeps chronological order
        let values: Vec<f64> = detail.quarter_series.iter().map(|q| q.value).collect();
        assert_eq!(values, vec![1e9, 1e9, 2e9, 1e9]);
        assert_eq!(detail.labor, LaborRatio::Defined(50.0));
        // Unfiltered grid covers all nine sectors
        assert_eq!(detail.all_sectors.len(), 9);
    }

    #[test]
    fn test_assembly_is_referentially_pure() {
        let records = sample_records();
        assert_eq!(quarterly_view(&records), quarterly_view(&records));
        assert_eq!(
            sector_view(&records, Sector::Esdm),
            sector_view(&records, Sector::Esdm)
        );
        assert_eq!(capital_view(&records), capital_view(&records));
    }
}
