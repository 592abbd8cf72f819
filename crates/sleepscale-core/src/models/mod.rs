pub mod diary;
pub mod record;
pub mod report;
pub mod respondent;
pub mod score;
pub mod submission;
