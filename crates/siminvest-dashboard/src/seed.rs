//! Bundled seed dataset: realized investment for the ten NTB regencies
//!
//! The dashboard starts from this collection until an import, snapshot or
//! cloud pull replaces it. Sector, quarterly and capital partitions here
//! reconcile with the totals, but imported data is not required to.

use siminvest_engine::RegencyRecord;

/// Build the seed collection (fresh copy each call)
pub fn seed_records() -> Vec<RegencyRecord> {
    vec![
        RegencyRecord {
            id: "mataram".to_string(),
            no: 1,
            kab_kota: "Kota Mataram".to_string(),
            esdm: 0.0,
            pariwisata: 280e9,
            pertanian: 45e9,
            pupr: 410e9,
            perdagangan: 620e9,
            perhubungan: 90e9,
            telekomunikasi: 190e9,
            perindustrian: 140e9,
            lainnya: 75e9,
            nilai_investasi: 1850e9,
            tw1: 380e9,
            tw2: 460e9,
            tw3: 510e9,
            tw4: 500e9,
            pma: 320e9,
            pmdn: 1530e9,
            tka: 14,
            tki: 4200,
            jumlah_proyek: 1240,
        },
        RegencyRecord {
            id: "lombok-barat".to_string(),
            no: 2,
            kab_kota: "Lombok Barat".to_string(),
            esdm: 120e9,
            pariwisata: 980e9,
            pertanian: 230e9,
            pupr: 540e9,
            perdagangan: 370e9,
            perhubungan: 110e9,
            telekomunikasi: 95e9,
            perindustrian: 85e9,
            lainnya: 110e9,
            nilai_investasi: 2640e9,
            tw1: 520e9,
            tw2: 640e9,
            tw3: 710e9,
            tw4: 770e9,
            pma: 760e9,
            pmdn: 1880e9,
            tka: 36,
            tki: 5100,
            jumlah_proyek: 980,
        },
        RegencyRecord {
            id: "lombok-tengah".to_string(),
            no: 3,
            kab_kota: "Lombok Tengah".to_string(),
            esdm: 0.0,
            pariwisata: 1450e9,
            pertanian: 180e9,
            pupr: 620e9,
            perdagangan: 240e9,
            perhubungan: 310e9,
            telekomunikasi: 110e9,
            perindustrian: 75e9,
            lainnya: 135e9,
            nilai_investasi: 3120e9,
            tw1: 610e9,
            tw2: 780e9,
            tw3: 820e9,
            tw4: 910e9,
            pma: 1340e9,
            pmdn: 1780e9,
            tka: 85,
            tki: 6900,
            jumlah_proyek: 1130,
        },
        RegencyRecord {
            id: "lombok-timur".to_string(),
            no: 4,
            kab_kota: "Lombok Timur".to_string(),
            esdm: 95e9,
            pariwisata: 250e9,
            pertanian: 430e9,
            pupr: 180e9,
            perdagangan: 320e9,
            perhubungan: 60e9,
            telekomunikasi: 55e9,
            perindustrian: 40e9,
            lainnya: 50e9,
            nilai_investasi: 1480e9,
            tw1: 310e9,
            tw2: 350e9,
            tw3: 390e9,
            tw4: 430e9,
            pma: 210e9,
            pmdn: 1270e9,
            tka: 8,
            tki: 3800,
            jumlah_proyek: 1420,
        },
        RegencyRecord {
            id: "lombok-utara".to_string(),
            no: 5,
            kab_kota: "Lombok Utara".to_string(),
            esdm: 0.0,
            pariwisata: 520e9,
            pertanian: 70e9,
            pupr: 130e9,
            perdagangan: 85e9,
            perhubungan: 35e9,
            telekomunikasi: 30e9,
            perindustrian: 15e9,
            lainnya: 35e9,
            nilai_investasi: 920e9,
            tw1: 180e9,
            tw2: 230e9,
            tw3: 250e9,
            tw4: 260e9,
            pma: 410e9,
            pmdn: 510e9,
            tka: 22,
            tki: 1600,
            jumlah_proyek: 410,
        },
        RegencyRecord {
            id: "sumbawa".to_string(),
            no: 6,
            kab_kota: "Sumbawa".to_string(),
            esdm: 540e9,
            pariwisata: 130e9,
            pertanian: 680e9,
            pupr: 290e9,
            perdagangan: 310e9,
            perhubungan: 85e9,
            telekomunikasi: 45e9,
            perindustrian: 160e9,
            lainnya: 70e9,
            nilai_investasi: 2310e9,
            tw1: 480e9,
            tw2: 550e9,
            tw3: 610e9,
            tw4: 670e9,
            pma: 650e9,
            pmdn: 1660e9,
            tka: 28,
            tki: 4300,
            jumlah_proyek: 760,
        },
        RegencyRecord {
            id: "sumbawa-barat".to_string(),
            no: 7,
            kab_kota: "Sumbawa Barat".to_string(),
            esdm: 4850e9,
            pariwisata: 90e9,
            pertanian: 150e9,
            pupr: 620e9,
            perdagangan: 220e9,
            perhubungan: 130e9,
            telekomunikasi: 60e9,
            perindustrian: 430e9,
            lainnya: 200e9,
            nilai_investasi: 6750e9,
            tw1: 1420e9,
            tw2: 1650e9,
            tw3: 1780e9,
            tw4: 1900e9,
            pma: 4200e9,
            pmdn: 2550e9,
            tka: 310,
            tki: 8200,
            jumlah_proyek: 540,
        },
        RegencyRecord {
            id: "dompu".to_string(),
            no: 8,
            kab_kota: "Dompu".to_string(),
            esdm: 140e9,
            pariwisata: 40e9,
            pertanian: 310e9,
            pupr: 95e9,
            perdagangan: 110e9,
            perhubungan: 30e9,
            telekomunikasi: 20e9,
            perindustrian: 15e9,
            lainnya: 20e9,
            nilai_investasi: 780e9,
            tw1: 150e9,
            tw2: 185e9,
            tw3: 215e9,
            tw4: 230e9,
            pma: 95e9,
            pmdn: 685e9,
            tka: 0,
            tki: 1900,
            jumlah_proyek: 330,
        },
        RegencyRecord {
            id: "bima".to_string(),
            no: 9,
            kab_kota: "Bima".to_string(),
            esdm: 150e9,
            pariwisata: 65e9,
            pertanian: 390e9,
            pupr: 120e9,
            perdagangan: 180e9,
            perhubungan: 45e9,
            telekomunikasi: 30e9,
            perindustrian: 25e9,
            lainnya: 35e9,
            nilai_investasi: 1040e9,
            tw1: 210e9,
            tw2: 250e9,
            tw3: 280e9,
            tw4: 300e9,
            pma: 120e9,
            pmdn: 920e9,
            tka: 6,
            tki: 2400,
            jumlah_proyek: 520,
        },
        RegencyRecord {
            id: "kota-bima".to_string(),
            no: 10,
            kab_kota: "Kota Bima".to_string(),
            esdm: 0.0,
            pariwisata: 45e9,
            pertanian: 40e9,
            pupr: 90e9,
            perdagangan: 160e9,
            perhubungan: 25e9,
            telekomunikasi: 20e9,
            perindustrian: 10e9,
            lainnya: 20e9,
            nilai_investasi: 410e9,
            tw1: 85e9,
            tw2: 100e9,
            tw3: 110e9,
            tw4: 115e9,
            pma: 0.0,
            pmdn: 410e9,
            tka: 0,
            tki: 980,
            jumlah_proyek: 290,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use siminvest_engine::record::{Quarter, Sector};

    #[test]
    fn test_seed_has_ten_unique_regencies() {
        let records = seed_records();
        assert_eq!(records.len(), 10);

        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_seed_partitions_reconcile() {
        // Seed data is curated, so all three advisory partitions hold exactly
        for record in seed_records() {
            let sector_sum: f64 = Sector::ALL.iter().map(|&s| record.sector(s)).sum();
            let quarter_sum: f64 = Quarter::ALL.iter().map(|&q| record.quarter(q)).sum();
            assert_eq!(sector_sum, record.nilai_investasi, "{}", record.kab_kota);
            assert_eq!(quarter_sum, record.nilai_investasi, "{}", record.kab_kota);
            assert_eq!(
                record.pma + record.pmdn,
                record.nilai_investasi,
                "{}",
                record.kab_kota
            );
        }
    }
}
