pub mod timekeeper_proto {
    tonic::include_proto!("timekeeper");
}

pub mod budget;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod text;
