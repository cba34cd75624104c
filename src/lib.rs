pub mod action_mapper;
pub mod config;
pub mod controller;
pub mod csv_loader;
pub mod debounce;
pub mod gesture_classifier;
pub mod hid;
pub mod pose;
pub mod types;
