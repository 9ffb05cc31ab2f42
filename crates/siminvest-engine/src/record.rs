//! Regency investment records and the fixed sector/quarter descriptors
//!
//! Records are immutable values: the collection is only ever replaced
//! wholesale (import, cloud pull, reset), never edited field by field.

use serde::{Deserialize, Serialize};

/// One regency's realized-investment record for the reporting year.
///
/// Serialized field names match the JSON interchange format consumed by
/// imports, exports and cloud sync (`kabKota`, `nilaiInvestasi`, ...).
/// The sector, quarterly and capital-source partitions are advisory: each
/// should sum to roughly `nilai_investasi`, with `lainnya` absorbing
/// sector discrepancy, but the engine never enforces reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegencyRecord {
    pub id: String,
    /// Display ordering number
    pub no: u32,
    /// Region name, unique within a collection
    pub kab_kota: String,

    // Sector amounts (IDR)
    pub esdm: f64,
    pub pariwisata: f64,
    pub pertanian: f64,
    pub pupr: f64,
    pub perdagangan: f64,
    pub perhubungan: f64,
    pub telekomunikasi: f64,
    pub perindustrian: f64,
    /// Catch-all absorbing the gap between sector sums and the total
    pub lainnya: f64,

    /// Total realized investment (IDR)
    pub nilai_investasi: f64,

    // Quarterly realization (IDR)
    pub tw1: f64,
    pub tw2: f64,
    pub tw3: f64,
    pub tw4: f64,

    // Capital source split (IDR)
    pub pma: f64,
    pub pmdn: f64,

    /// Foreign workers
    pub tka: u64,
    /// Domestic workers
    pub tki: u64,
    pub jumlah_proyek: u64,
}

impl RegencyRecord {
    /// Amount realized in the given sector
    pub fn sector(&self, sector: Sector) -> f64 {
        match sector {
            Sector::Esdm => self.esdm,
            Sector::Pariwisata => self.pariwisata,
            Sector::Pertanian => self.pertanian,
            Sector::Pupr => self.pupr,
            Sector::Perdagangan => self.perdagangan,
            Sector::Perhubungan => self.perhubungan,
            Sector::Telekomunikasi => self.telekomunikasi,
            Sector::Perindustrian => self.perindustrian,
            Sector::Lainnya => self.lainnya,
        }
    }

    /// Amount realized in the given quarter
    pub fn quarter(&self, quarter: Quarter) -> f64 {
        match quarter {
            Quarter::Tw1 => self.tw1,
            Quarter::Tw2 => self.tw2,
            Quarter::Tw3 => self.tw3,
            Quarter::Tw4 => self.tw4,
        }
    }
}

/// Investment sector descriptor.
///
/// Replaces string-keyed field access with an enumerated accessor so that
/// generic iteration over sectors stays type-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Esdm,
    Pariwisata,
    Pertanian,
    Pupr,
    Perdagangan,
    Perhubungan,
    Telekomunikasi,
    Perindustrian,
    Lainnya,
}

impl Sector {
    /// All sectors in canonical display order
    pub const ALL: [Sector; 9] = [
        Sector::Esdm,
        Sector::Pariwisata,
        Sector::Pertanian,
        Sector::Pupr,
        Sector::Perdagangan,
        Sector::Perhubungan,
        Sector::Telekomunikasi,
        Sector::Perindustrian,
        Sector::Lainnya,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Sector::Esdm => "ESDM",
            Sector::Pariwisata => "Pariwisata",
            Sector::Pertanian => "Pertanian",
            Sector::Pupr => "PUPR",
            Sector::Perdagangan => "Perdagangan",
            Sector::Perhubungan => "Perhubungan",
            Sector::Telekomunikasi => "Telekomunikasi",
            Sector::Perindustrian => "Perindustrian",
            Sector::Lainnya => "Lainnya",
        }
    }

    /// JSON/record field key
    pub fn key(self) -> &'static str {
        match self {
            Sector::Esdm => "esdm",
            Sector::Pariwisata => "pariwisata",
            Sector::Pertanian => "pertanian",
            Sector::Pupr => "pupr",
            Sector::Perdagangan => "perdagangan",
            Sector::Perhubungan => "perhubungan",
            Sector::Telekomunikasi => "telekomunikasi",
            Sector::Perindustrian => "perindustrian",
            Sector::Lainnya => "lainnya",
        }
    }

    /// Look a sector up by its field key (CLI selection)
    pub fn from_key(key: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fiscal quarter descriptor (TW I through TW IV)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Tw1,
    Tw2,
    Tw3,
    Tw4,
}

impl Quarter {
    /// All quarters in chronological order. Quarter sequences are never
    /// re-sorted; this order is meaningful.
    pub const ALL: [Quarter; 4] = [Quarter::Tw1, Quarter::Tw2, Quarter::Tw3, Quarter::Tw4];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Quarter::Tw1 => "TW I",
            Quarter::Tw2 => "TW II",
            Quarter::Tw3 => "TW III",
            Quarter::Tw4 => "TW IV",
        }
    }

    /// JSON/record field key
    pub fn key(self) -> &'static str {
        match self {
            Quarter::Tw1 => "tw1",
            Quarter::Tw2 => "tw2",
            Quarter::Tw3 => "tw3",
            Quarter::Tw4 => "tw4",
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// All-zero record fixture shared by the engine's unit tests
#[cfg(test)]
pub(crate) fn test_record(kab_kota: &str) -> RegencyRecord {
    RegencyRecord {
        id: kab_kota.to_lowercase().replace(' ', "-"),
        no: 1,
        kab_kota: kab_kota.to_string(),
        esdm: 0.0,
        pariwisata: 0.0,
        pertanian: 0.0,
        pupr: 0.0,
        perdagangan: 0.0,
        perhubungan: 0.0,
        telekomunikasi: 0.0,
        perindustrian: 0.0,
        lainnya: 0.0,
        nilai_investasi: 0.0,
        tw1: 0.0,
        tw2: 0.0,
        tw3: 0.0,
        tw4: 0.0,
        pma: 0.0,
        pmdn: 0.0,
        tka: 0,
        tki: 0,
        jumlah_proyek: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names_match_interchange_format() {
        let mut record = test_record("Kota Mataram");
        record.nilai_investasi = 130_000_000.0;
        record.jumlah_proyek = 20;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kabKota"], "Kota Mataram");
        assert_eq!(json["nilaiInvestasi"], 130_000_000.0);
        assert_eq!(json["jumlahProyek"], 20);
        assert!(json.get("kab_kota").is_none());
    }

    #[test]
    fn test_sector_accessor_covers_all_descriptors() {
        let mut record = test_record("Dompu");
        record.pariwisata = 85_000_000.0;
        record.lainnya = 5_000_000.0;

        assert_eq!(record.sector(Sector::Pariwisata), 85_000_000.0);
        assert_eq!(record.sector(Sector::Lainnya), 5_000_000.0);
        assert_eq!(record.sector(Sector::Esdm), 0.0);
    }

    #[test]
    fn test_sector_from_key() {
        assert_eq!(Sector::from_key("pupr"), Some(Sector::Pupr));
        assert_eq!(Sector::from_key("unknown"), None);
    }

    #[test]
    fn test_quarter_order_is_chronological() {
        let labels: Vec<&str> = Quarter::ALL.iter().map(|q| q.label()).collect();
        assert_eq!(labels, vec!["TW I", "TW II", "TW III", "TW IV"]);
    }
}
