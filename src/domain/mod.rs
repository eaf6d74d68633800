pub mod commit;
pub mod issue;
pub mod report;
