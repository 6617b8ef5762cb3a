/// History primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub type DbId = i64;

/// Whole currency units (rupiah). Fractions are always truncated toward zero.
pub type Money = i64;
