//! Unit test modules.

mod pace_range_test;
mod preferences_test;
mod splits_test;
mod table_test;
