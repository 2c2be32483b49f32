pub mod a001_merchant;
pub mod a002_pos_device;
pub mod a003_fraud_alert;
pub mod a004_commission_entry;
pub mod a005_cloud_service;
