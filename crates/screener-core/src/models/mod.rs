pub mod answer;
pub mod screener;
pub mod submission;
