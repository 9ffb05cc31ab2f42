//! Per-region summary reshaping for the narrative analysis collaborator
//!
//! The collaborator receives a derived JSON view of each record, not the
//! raw records; field names here are part of its input contract.

use serde::Serialize;

use crate::record::RegencyRecord;

/// Capital-source split inside a region summary
#[derive(Debug, Clone, Serialize)]
pub struct CapitalSplit {
    pub pma: f64,
    pub pmdn: f64,
}

/// Sector amounts inside a region summary
#[derive(Debug, Clone, Serialize)]
pub struct SectorAmounts {
    pub esdm: f64,
    pub pariwisata: f64,
    pub pertanian: f64,
    pub pupr: f64,
    pub perdagangan: f64,
    pub perhubungan: f64,
    pub telekomunikasi: f64,
    pub perindustrian: f64,
    pub lainnya: f64,
}

/// Quarterly amounts inside a region summary
#[derive(Debug, Clone, Serialize)]
pub struct QuarterAmounts {
    #[serde(rename = "TW1")]
    pub tw1: f64,
    #[serde(rename = "TW2")]
    pub tw2: f64,
    #[serde(rename = "TW3")]
    pub tw3: f64,
    #[serde(rename = "TW4")]
    pub tw4: f64,
}

/// One region's derived summary as consumed by the analysis collaborator
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub wilayah: String,
    pub total_investasi: f64,
    pub sumber_modal: CapitalSplit,
    pub sektor: SectorAmounts,
    pub triwulan: QuarterAmounts,
    #[serde(rename = "serapanTKI")]
    pub serapan_tki: u64,
    #[serde(rename = "penggunaanTKA")]
    pub penggunaan_tka: u64,
    pub jumlah_proyek: u64,
}

/// Reshape every record into its analysis summary, preserving input order
pub fn region_summaries(records: &[RegencyRecord]) -> Vec<RegionSummary> {
    records
        .iter()
        .map(|r| RegionSummary {
            wilayah: r.kab_kota.clone(),
            total_investasi: r.nilai_investasi,
            sumber_modal: CapitalSplit {
                pma: r.pma,
                pmdn: r.pmdn,
            },
            sektor: SectorAmounts {
                esdm: r.esdm,
                pariwisata: r.pariwisata,
                pertanian: r.pertanian,
                pupr: r.pupr,
                perdagangan: r.perdagangan,
                perhubungan: r.perhubungan,
                telekomunikasi: r.telekomunikasi,
                perindustrian: r.perindustrian,
                lainnya: r.lainnya,
            },
            triwulan: QuarterAmounts {
                tw1: r.tw1,
                tw2: r.tw2,
                tw3: r.tw3,
                tw4: r.tw4,
            },
            serapan_tki: r.tki,
            penggunaan_tka: r.tka,
            jumlah_proyek: r.jumlah_proyek,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_record;

    #[test]
    fn test_summary_field_names_match_collaborator_contract() {
        let mut record = test_record("Lombok Timur");
        record.nilai_investasi = 130_000_000.0;
        record.pma = 30_000_000.0;
        record.pmdn = 100_000_000.0;
        record.tw1 = 130_000_000.0;
        record.tki = 150;
        record.tka = 5;
        record.jumlah_proyek = 20;

        let summaries = region_summaries(&[record]);
        let json = serde_json::to_value(&summaries[0]).unwrap();

        assert_eq!(json["wilayah"], "Lombok Timur");
        assert_eq!(json["totalInvestasi"], 130_000_000.0);
        assert_eq!(json["sumberModal"]["pma"], 30_000_000.0);
        assert_eq!(json["triwulan"]["TW1"], 130_000_000.0);
        assert_eq!(json["serapanTKI"], 150);
        assert_eq!(json["penggunaanTKA"], 5);
        assert_eq!(json["jumlahProyek"], 20);
    }
}
