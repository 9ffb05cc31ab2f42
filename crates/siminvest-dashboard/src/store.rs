//! SQLite snapshot storage for the record collection
//!
//! The collection only ever changes wholesale, and the store mirrors that:
//! saving deletes and reinserts every row inside one transaction, so a
//! reader never observes a partially replaced snapshot.

use anyhow::{Context, Result};
use sqlx::{FromRow, SqlitePool};
use std::path::Path;

use siminvest_engine::RegencyRecord;

/// Snapshot database wrapper
pub struct Store {
    pool: SqlitePool,
}

/// Row type for the records table
#[derive(FromRow)]
struct RecordRow {
    id: String,
    no: i64,
    kab_kota: String,
    esdm: f64,
    pariwisata: f64,
    pertanian: f64,
    pupr: f64,
    perdagangan: f64,
    perhubungan: f64,
    telekomunikasi: f64,
    perindustrian: f64,
    lainnya: f64,
    nilai_investasi: f64,
    tw1: f64,
    tw2: f64,
    tw3: f64,
    tw4: f64,
    pma: f64,
    pmdn: f64,
    tka: i64,
    tki: i64,
    jumlah_proyek: i64,
}

impl From<RecordRow> for RegencyRecord {
    fn from(r: RecordRow) -> Self {
        RegencyRecord {
            id: r.id,
            no: r.no as u32,
            kab_kota: r.kab_kota,
            esdm: r.esdm,
            pariwisata: r.pariwisata,
            pertanian: r.pertanian,
            pupr: r.pupr,
            perdagangan: r.perdagangan,
            perhubungan: r.perhubungan,
            telekomunikasi: r.telekomunikasi,
            perindustrian: r.perindustrian,
            lainnya: r.lainnya,
            nilai_investasi: r.nilai_investasi,
            tw1: r.tw1,
            tw2: r.tw2,
            tw3: r.tw3,
            tw4: r.tw4,
            pma: r.pma,
            pmdn: r.pmdn,
            tka: r.tka as u64,
            tki: r.tki as u64,
            jumlah_proyek: r.jumlah_proyek as u64,
        }
    }
}

impl Store {
    /// Open or create the snapshot database
    pub async fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // SQLx requires the file to exist for SQLite
        if !path.exists() {
            std::fs::File::create(path)?;
        }

        let url = format!("sqlite:{}", path.display());
        let pool = SqlitePool::connect(&url)
            .await
            .context("Failed to open snapshot database")?;

        // WAL mode and a busy timeout avoid SQLITE_BUSY on concurrent access
        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
        sqlx::query("PRAGMA busy_timeout=5000").execute(&pool).await?;

        let store = Self { pool };
        store.init_schema().await?;

        Ok(store)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "
            -- Current record collection (one row per regency)
            CREATE TABLE IF NOT EXISTS records (
                id TEXT PRIMARY KEY,
                no INTEGER NOT NULL,
                kab_kota TEXT NOT NULL,
                esdm REAL NOT NULL,
                pariwisata REAL NOT NULL,
                pertanian REAL NOT NULL,
                pupr REAL NOT NULL,
                perdagangan REAL NOT NULL,
                perhubungan REAL NOT NULL,
                telekomunikasi REAL NOT NULL,
                perindustrian REAL NOT NULL,
                lainnya REAL NOT NULL,
                nilai_investasi REAL NOT NULL,
                tw1 REAL NOT NULL,
                tw2 REAL NOT NULL,
                tw3 REAL NOT NULL,
                tw4 REAL NOT NULL,
                pma REAL NOT NULL,
                pmdn REAL NOT NULL,
                tka INTEGER NOT NULL,
                tki INTEGER NOT NULL,
                jumlah_proyek INTEGER NOT NULL,
                saved_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replace the stored snapshot with the given collection
    pub async fn save(&self, records: &[RegencyRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM records").execute(&mut *tx).await?;

        for record in records {
            sqlx::query(
                "INSERT INTO records
                 (id, no, kab_kota, esdm, pariwisata, pertanian, pupr,
                  perdagangan, perhubungan, telekomunikasi, perindustrian,
                  lainnya, nilai_investasi, tw1, tw2, tw3, tw4, pma, pmdn,
                  tka, tki, jumlah_proyek)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&record.id)
            .bind(record.no as i64)
            .bind(&record.kab_kota)
            .bind(record.esdm)
            .bind(record.pariwisata)
            .bind(record.pertanian)
            .bind(record.pupr)
            .bind(record.perdagangan)
            .bind(record.perhubungan)
            .bind(record.telekomunikasi)
            .bind(record.perindustrian)
            .bind(record.lainnya)
            .bind(record.nilai_investasi)
            .bind(record.tw1)
            .bind(record.tw2)
            .bind(record.tw3)
            .bind(record.tw4)
            .bind(record.pma)
            .bind(record.pmdn)
            .bind(record.tka as i64)
            .bind(record.tki as i64)
            .bind(record.jumlah_proyek as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// Load the stored snapshot, `None` when nothing has been saved
    pub async fn load(&self) -> Result<Option<Vec<RegencyRecord>>> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            "SELECT id, no, kab_kota, esdm, pariwisata, pertanian, pupr,
                    perdagangan, perhubungan, telekomunikasi, perindustrian,
                    lainnya, nilai_investasi, tw1, tw2, tw3, tw4, pma, pmdn,
                    tka, tki, jumlah_proyek
             FROM records
             ORDER BY no",
        )
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(rows.into_iter().map(Into::into).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = std::env::temp_dir().join("siminvest-store-test");
        let path = dir.join("round_trip.sqlite");
        let _ = std::fs::remove_file(&path);

        let store = Store::open(&path).await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        let records = seed_records();
        store.save(&records).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, records);

        // A second save replaces the snapshot wholesale
        store.save(&records[..2]).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
