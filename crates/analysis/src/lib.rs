pub mod client;
pub mod language;
pub mod links;
pub mod normalize;
pub mod recommend;
mod recover;
pub mod status;

pub use client::AnalysisClient;
pub use normalize::{normalize, AnalysisResult};
