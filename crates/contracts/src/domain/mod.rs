pub mod common;

pub mod a001_buyer;
pub mod a002_supplier;
pub mod a003_bank_account;
pub mod a004_style_summary;
pub mod a005_style_variant;
pub mod a006_required_material;
pub mod a007_sample;
pub mod a008_sample_tna;
