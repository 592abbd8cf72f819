pub mod fss;
pub mod has;
pub mod isi;
pub mod psqi;
pub mod sas;
pub mod sds;
