//! Pure aggregation over regency record collections
//!
//! Every aggregate is recomputed on demand from the full collection. The
//! collection is small (tens of regions) and only changes wholesale, so
//! there is no incremental state to fall out of sync.

use thiserror::Error;

use crate::record::{Quarter, RegencyRecord, Sector};

/// Degenerate aggregation cases that callers must render with a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatError {
    /// A share of a zero total has no defined value
    #[error("share of a zero total is indeterminate")]
    IndeterminateShare,
}

/// Province-wide headline statistics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalStats {
    pub total_investasi: f64,
    pub total_tka: u64,
    pub total_tki: u64,
    pub total_proyek: u64,
}

/// Sum investment, labor and project counts across all records.
/// An empty collection yields all zeros.
pub fn global_stats(records: &[RegencyRecord]) -> GlobalStats {
    records.iter().fold(GlobalStats::default(), |acc, r| GlobalStats {
        total_investasi: acc.total_investasi + r.nilai_investasi,
        total_tka: acc.total_tka + r.tka,
        total_tki: acc.total_tki + r.tki,
        total_proyek: acc.total_proyek + r.jumlah_proyek,
    })
}

/// A named value in a ranked chart series
#[derive(Debug, Clone, PartialEq)]
pub struct RankedValue {
    pub name: String,
    pub value: f64,
}

/// Map records to `(kab_kota, nilai_investasi / divisor)` sorted descending.
/// The sort is stable: ties keep input order, which fixes bar ordering.
pub fn rank_by_investment(records: &[RegencyRecord], divisor: f64) -> Vec<RankedValue> {
    let mut ranked: Vec<RankedValue> = records
        .iter()
        .map(|r| RankedValue {
            name: r.kab_kota.clone(),
            value: r.nilai_investasi / divisor,
        })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked
}

/// Total realized in one sector across a collection (or one record)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTotal {
    pub sector: Sector,
    pub value: f64,
}

/// Per-sector sums in canonical sector order
pub fn sector_totals(records: &[RegencyRecord]) -> Vec<SectorTotal> {
    Sector::ALL
        .into_iter()
        .map(|sector| SectorTotal {
            sector,
            value: records.iter().map(|r| r.sector(sector)).sum(),
        })
        .collect()
}

/// Per-sector sums sorted descending by value (stable among ties)
pub fn ranked_sector_totals(records: &[RegencyRecord]) -> Vec<SectorTotal> {
    let mut totals = sector_totals(records);
    totals.sort_by(|a, b| b.value.total_cmp(&a.value));
    totals
}

/// Total realized in one quarter across a collection (or one record)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterTotal {
    pub quarter: Quarter,
    pub value: f64,
}

/// Per-quarter sums, always in TW I..TW IV order regardless of input order
pub fn quarter_totals(records: &[RegencyRecord]) -> Vec<QuarterTotal> {
    Quarter::ALL
        .into_iter()
        .map(|quarter| QuarterTotal {
            quarter,
            value: records.iter().map(|r| r.quarter(quarter)).sum(),
        })
        .collect()
}

/// Capital-source totals.
///
/// `total` sums `nilai_investasi`, not `pma + pmdn`: the two need not
/// reconcile exactly, and shares are quoted against total investment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapitalTotals {
    pub pma: f64,
    pub pmdn: f64,
    pub total: f64,
}

pub fn capital_source_totals(records: &[RegencyRecord]) -> CapitalTotals {
    records.iter().fold(CapitalTotals::default(), |acc, r| CapitalTotals {
        pma: acc.pma + r.pma,
        pmdn: acc.pmdn + r.pmdn,
        total: acc.total + r.nilai_investasi,
    })
}

/// `(part / total) * 100`, with a zero total signaled as indeterminate
/// instead of producing NaN or infinity
pub fn capital_share_percent(part: f64, total: f64) -> Result<f64, StatError> {
    if total == 0.0 {
        return Err(StatError::IndeterminateShare);
    }
    Ok(part / total * 100.0)
}

/// One record's sector amounts, filtered to `value > 0` and sorted
/// descending. Drives the single-region distribution chart.
pub fn sector_breakdown(record: &RegencyRecord) -> Vec<SectorTotal> {
    let mut breakdown: Vec<SectorTotal> = Sector::ALL
        .into_iter()
        .map(|sector| SectorTotal {
            sector,
            value: record.sector(sector),
        })
        .filter(|t| t.value > 0.0)
        .collect();
    breakdown.sort_by(|a, b| b.value.total_cmp(&a.value));
    breakdown
}

/// Domestic-per-foreign worker ratio, undefined when there are no
/// foreign workers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaborRatio {
    Defined(f64),
    Undefined,
}

impl LaborRatio {
    pub fn value(self) -> Option<f64> {
        match self {
            LaborRatio::Defined(ratio) => Some(ratio),
            LaborRatio::Undefined => None,
        }
    }
}

impl std::fmt::Display for LaborRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaborRatio::Defined(ratio) => write!(f, "{:.1}", ratio),
            LaborRatio::Undefined => write!(f, "∞"),
        }
    }
}

/// `tki / tka`, never dividing by zero
pub fn labor_ratio(tki: u64, tka: u64) -> LaborRatio {
    if tka == 0 {
        LaborRatio::Undefined
    } else {
        LaborRatio::Defined(tki as f64 / tka as f64)
    }
}

/// Lookup by record id. Fallback on a miss (the first record) is a caller
/// policy, applied explicitly at the call site.
pub fn find_record<'a>(records: &'a [RegencyRecord], id: &str) -> Option<&'a RegencyRecord> {
    records.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_record;

    /// The two-record scenario from the dashboard's acceptance checks
    fn scenario_records() -> Vec<RegencyRecord> {
        let mut a = test_record("A");
        a.nilai_investasi = 5e9;
        a.tka = 2;
        a.tki = 100;
        a.jumlah_proyek = 3;
        a.pma = 3e9;
        a.pmdn = 2e9;

        let mut b = test_record("B");
        b.nilai_investasi = 1e10;
        b.tka = 0;
        b.tki = 50;
        b.jumlah_proyek = 1;
        b.pma = 0.0;
        b.pmdn = 1e10;

        vec![a, b]
    }

    #[test]
    fn test_global_stats_sums_all_records() {
        let stats = global_stats(&scenario_records());
        assert_eq!(stats.total_investasi, 1.5e10);
        assert_eq!(stats.total_tka, 2);
        assert_eq!(stats.total_tki, 150);
        assert_eq!(stats.total_proyek, 4);
    }

    #[test]
    fn test_global_stats_empty_collection_is_zero() {
        assert_eq!(global_stats(&[]), GlobalStats::default());
    }

    #[test]
    fn test_rank_by_investment_descending() {
        let ranked = rank_by_investment(&scenario_records(), 1e9);
        assert_eq!(ranked[0].name, "B");
        assert_eq!(ranked[0].value, 10.0);
        assert_eq!(ranked[1].name, "A");
        assert_eq!(ranked[1].value, 5.0);
    }

    #[test]
    fn test_rank_by_investment_ties_keep_input_order() {
        let mut records = Vec::new();
        for name in ["Pertama", "Kedua", "Ketiga"] {
            let mut r = test_record(name);
            r.nilai_investasi = 7e9;
            records.push(r);
        }
        let ranked = rank_by_investment(&records, 1e9);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pertama", "Kedua", "Ketiga"]);
    }

    #[test]
    fn test_quarter_totals_order_fixed_regardless_of_input() {
        let mut a = test_record("A");
        a.tw1 = 1.0;
        a.tw4 = 9.0;
        let mut b = test_record("B");
        b.tw2 = 5.0;
        b.tw3 = 2.0;

        // TW4 has the largest total; order must stay chronological
        let forward = quarter_totals(&[a.clone(), b.clone()]);
        let reversed = quarter_totals(&[b, a]);
        let values: Vec<f64> = forward.iter().map(|q| q.value).collect();
        assert_eq!(values, vec![1.0, 5.0, 2.0, 9.0]);
        assert_eq!(forward, reversed);
        assert_eq!(forward[0].quarter, crate::record::Quarter::Tw1);
    }

    #[test]
    fn test_capital_totals_use_investment_denominator() {
        // pma + pmdn deliberately does not reconcile with nilai_investasi
        let mut r = test_record("A");
        r.nilai_investasi = 10e9;
        r.pma = 4e9;
        r.pmdn = 4e9;

        let totals = capital_source_totals(&[r]);
        assert_eq!(totals.total, 10e9);

        let pma_share = capital_share_percent(totals.pma, totals.total).unwrap();
        let pmdn_share = capital_share_percent(totals.pmdn, totals.total).unwrap();
        assert_eq!(pma_share, 40.0);
        // Shares need not sum to 100
        assert_eq!(pma_share + pmdn_share, 80.0);
    }

    #[test]
    fn test_capital_share_of_zero_total_is_indeterminate() {
        assert_eq!(
            capital_share_percent(5.0, 0.0),
            Err(StatError::IndeterminateShare)
        );
    }

    #[test]
    fn test_sector_breakdown_filters_zeros_and_sorts() {
        let mut r = test_record("Sumbawa");
        r.pariwisata = 85e6;
        r.perdagangan = 15e6;
        r.pertanian = 20e6;

        let breakdown = sector_breakdown(&r);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].sector, Sector::Pariwisata);
        assert_eq!(breakdown[1].sector, Sector::Pertanian);
        assert_eq!(breakdown[2].sector, Sector::Perdagangan);
    }

    #[test]
    fn test_labor_ratio() {
        assert_eq!(labor_ratio(150, 5), LaborRatio::Defined(30.0));
        assert_eq!(labor_ratio(150, 0), LaborRatio::Undefined);
        assert_eq!(labor_ratio(150, 0).to_string(), "∞");
    }

    #[test]
    fn test_find_record_miss_is_none() {
        let records = scenario_records();
        assert_eq!(find_record(&records, "a").map(|r| r.kab_kota.as_str()), Some("A"));
        assert!(find_record(&records, "tidak-ada").is_none());
    }
}
