pub mod add_remove_modify_counts;
pub mod change_type;
pub mod diff_result;
pub mod diff_row;
pub mod file_info;

pub use crate::model::add_remove_modify_counts::AddRemoveModifyCounts;
pub use crate::model::change_type::ChangeType;
pub use crate::model::diff_result::DiffResult;
pub use crate::model::diff_row::{DiffRow, DiffSide, IntralineSpan};
pub use crate::model::file_info::FileInfo;
