mod columns;
mod filter;
mod record;
mod row;

pub use columns::ColumnGroups;
pub use filter::{filter, filter_records, FilterStats, Filtered};
pub use record::PoleRecord;
pub use row::{RawRow, RowTable};
