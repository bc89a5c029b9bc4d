//! phone-core: add a column of unique synthetic phone numbers to CSV tables
//!
//! This library provides functionality to:
//! - Parse CSV files into in-memory tables and write them back out
//! - Generate batches of distinct 10-digit phone numbers
//! - Attach a generated `phone` column to a table, one number per row
//! - Discover candidate CSV files in a directory and process a chosen one

pub mod augmenter;
pub mod error;
pub mod generator;
pub mod parser;
pub mod phone;
pub mod scanner;
pub mod table;
pub mod writer;

pub use augmenter::{augment_file, augment_table, derive_output_path, AugmentOptions, AugmentReport};
pub use error::{Error, Result};
pub use generator::{generate_unique_phone_numbers, PhoneGenerator};
pub use parser::{parse_csv, parse_csv_str};
pub use phone::{PhoneNumber, PHONE_SPACE};
pub use scanner::{process_target, scan_csv_files, DiscoveryOutcome};
pub use table::{Column, Row, Table};
pub use writer::{to_csv_string, write_csv};
