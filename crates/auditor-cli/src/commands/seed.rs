//! Synthetic-data seeder for the local relational store
//!
//! Recreates the two fixed tables and fills them with fake company
//! data. Re-running clears the old rows first, so row counts stay
//! stable across runs.

use anyhow::Context;
use chrono::{Datelike, Days, Utc};
use rand::distr::{Alphanumeric, SampleString};
use rand::seq::IndexedRandom;
use rand::Rng;
use rusqlite::{params, Connection};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Barbara", "Edsger", "Donald", "Margaret", "Dennis", "Radia",
    "Ken", "Frances", "John", "Joan", "Linus", "Katherine", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Knuth", "Hamilton", "Ritchie",
    "Perlman", "Thompson", "Allen", "Backus", "Clarke", "Torvalds", "Johnson", "Berners-Lee",
];

const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "HR", "Legal"];

/// Create the tables if needed, clear old rows, and insert fresh data.
pub fn run(path: &Path, customers: usize, users: usize) -> anyhow::Result<()> {
    let conn = Connection::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS customers (
             id INTEGER PRIMARY KEY,
             name TEXT,
             email TEXT,
             total_spent REAL,
             last_order_date TEXT
         );

         CREATE TABLE IF NOT EXISTS users (
             id INTEGER PRIMARY KEY,
             username TEXT,
             password_hash TEXT,
             ssn TEXT,
             salary INTEGER,
             department TEXT
         );",
    )?;

    // Clear old data so re-seeding does not duplicate rows
    conn.execute("DELETE FROM customers", [])?;
    conn.execute("DELETE FROM users", [])?;

    let mut rng = rand::rng();

    for _ in 0..customers {
        let first = FIRST_NAMES.choose(&mut rng).unwrap();
        let last = LAST_NAMES.choose(&mut rng).unwrap();
        let email = format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        );
        let total_spent = (rng.random_range(10.0..5000.0_f64) * 100.0).round() / 100.0;
        conn.execute(
            "INSERT INTO customers (name, email, total_spent, last_order_date)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                format!("{first} {last}"),
                email,
                total_spent,
                date_this_year(&mut rng),
            ],
        )?;
    }

    for _ in 0..users {
        let first = FIRST_NAMES.choose(&mut rng).unwrap();
        let username = format!("{}{}", first.to_lowercase(), rng.random_range(10..100));
        conn.execute(
            "INSERT INTO users (username, password_hash, ssn, salary, department)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                username,
                password_hash(&mut rng),
                fake_ssn(&mut rng),
                rng.random_range(50_000..=150_000_i64),
                DEPARTMENTS.choose(&mut rng).unwrap(),
            ],
        )?;
    }

    info!(path = %path.display(), customers, users, "seeded mock data");
    Ok(())
}

/// A date within the current year, formatted `YYYY-MM-DD`.
fn date_this_year(rng: &mut impl Rng) -> String {
    let today = Utc::now().date_naive();
    let offset = rng.random_range(0..=today.ordinal0());
    (today - Days::new(offset as u64)).format("%Y-%m-%d").to_string()
}

/// A realistic-looking salted hash in werkzeug's storage format.
fn password_hash(rng: &mut impl Rng) -> String {
    let salt = Alphanumeric.sample_string(rng, 16);
    let password = Alphanumeric.sample_string(rng, 12);
    let digest = Sha256::digest(format!("{salt}{password}").as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("pbkdf2:sha256:600000${salt}${hex}")
}

fn fake_ssn(rng: &mut impl Rng) -> String {
    format!(
        "{:03}-{:02}-{:04}",
        rng.random_range(100..900),
        rng.random_range(10..100),
        rng.random_range(1000..10000)
    )
}
