//! Table definitions and seed rows.

/// DDL applied at startup, in dependency order.
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        email         TEXT    NOT NULL UNIQUE,
        password_hash TEXT    NOT NULL,
        name          TEXT    NOT NULL DEFAULT '',
        created_at    TEXT    NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id         INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
        skill_readiness INTEGER NOT NULL DEFAULT 0,
        verified_skills INTEGER NOT NULL DEFAULT 0,
        total_xp        INTEGER NOT NULL DEFAULT 0,
        certifications  INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS survey_responses (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id      INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        question_1   TEXT,
        question_2   TEXT,
        question_3   TEXT,
        question_4   TEXT,
        question_5   TEXT,
        completed_at TEXT    NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_survey_responses_user_id ON survey_responses(user_id)",
    r#"
    CREATE TABLE IF NOT EXISTS challenges (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        title      TEXT NOT NULL,
        company    TEXT,
        domain     TEXT,
        difficulty TEXT,
        deadline   TEXT,
        status     TEXT
    )
    "#,
];

pub struct SeedChallenge {
    pub title: &'static str,
    pub company: &'static str,
    pub domain: &'static str,
    pub difficulty: &'static str,
    pub deadline: &'static str,
    pub status: &'static str,
}

pub const SEED_CHALLENGES: &[SeedChallenge] = &[
    SeedChallenge {
        title: "Full-Stack Web Development Challenge",
        company: "TechCorp Inc.",
        domain: "Web Development",
        difficulty: "Medium",
        deadline: "Jan 25, 2026",
        status: "Continue Challenge",
    },
    SeedChallenge {
        title: "Data Science & ML Pipeline",
        company: "DataMinds AI",
        domain: "Machine Learning",
        difficulty: "Hard",
        deadline: "Feb 1, 2026",
        status: "Start Challenge",
    },
    SeedChallenge {
        title: "React Component Library Design",
        company: "DesignHub",
        domain: "Frontend Development",
        difficulty: "Easy",
        deadline: "Jan 30, 2026",
        status: "View Details",
    },
];
