pub mod database;
pub mod report;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;
