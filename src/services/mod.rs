pub mod bing_search;
pub mod data_persistance;
pub mod droid;
pub mod extraction;
pub mod harvester;
pub mod openai_client;

pub use bing_search::*;
pub use data_persistance::*;
pub use droid::*;
pub use extraction::*;
pub use harvester::*;
pub use openai_client::*;
