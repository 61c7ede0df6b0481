pub mod aggregate;
pub mod bucketview;
mod cell;
mod charset;
pub mod column;
mod config;
pub mod export;
pub mod filter;
pub mod fs;
mod itemcode;
mod partition;
mod record;
mod report;
pub mod session;
pub mod sheet;
pub mod util;

#[cfg(test)]
pub mod testing;

pub use aggregate::Aggregate;
pub use cell::Cell;
pub use charset::Charset;
pub use column::Column;
pub use column::ExportColumn;
pub use config::Config;
pub use filter::filter_records;
pub use fs::Fs;
pub use itemcode::GroupKey;
pub use itemcode::ItemCode;
pub use partition::ColorBucket;
pub use partition::Partition;
pub use record::InventoryRecord;
pub use report::Report;
pub use report::ReportRow;
pub use session::Session;
pub use sheet::Sheet;
