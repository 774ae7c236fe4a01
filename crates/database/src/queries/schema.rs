//! DDL for the depot tables. Every statement is safe to run repeatedly.

/// In foreign key order, so each table only references tables created
/// before it.
pub const CREATE_TABLES: [&str; 4] = [
    "
    CREATE TABLE IF NOT EXISTS locomotives (
        reg_number SERIAL PRIMARY KEY,
        depot VARCHAR(50) NOT NULL,
        type VARCHAR(50) NOT NULL,
        year INT NOT NULL
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS teams (
        team_number SERIAL PRIMARY KEY,
        phone VARCHAR(20) NOT NULL
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS repairs (
        repair_id SERIAL PRIMARY KEY,
        reg_number INT NOT NULL REFERENCES locomotives(reg_number) ON DELETE CASCADE,
        repair_type VARCHAR(50) NOT NULL,
        start_date DATE NOT NULL,
        days_needed INT NOT NULL,
        daily_cost NUMERIC(10, 2) NOT NULL,
        team_number INT REFERENCES teams(team_number) ON DELETE SET NULL
    );
    ",
    "
    CREATE TABLE IF NOT EXISTS workers (
        worker_id SERIAL PRIMARY KEY,
        last_name VARCHAR(50) NOT NULL,
        first_name VARCHAR(50) NOT NULL,
        middle_name VARCHAR(50) NOT NULL,
        team_number INT NOT NULL REFERENCES teams(team_number) ON DELETE CASCADE,
        is_leader BOOLEAN NOT NULL,
        birth_date DATE NOT NULL
    );
    ",
];

pub const DROP_TABLES: &str = "DROP TABLE IF EXISTS workers, repairs, teams, locomotives CASCADE;";

/// Tables of the depot schema that exist in the current `search_path`.
pub const EXISTING_TABLES: &str = "
    SELECT table_name::TEXT
    FROM information_schema.tables
    WHERE table_schema = current_schema()
        AND table_name IN ('locomotives', 'repairs', 'teams', 'workers')
    ORDER BY table_name;
    ";
