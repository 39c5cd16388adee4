pub mod construction;
pub mod contract;
pub mod market;
pub mod pricing;
pub mod recommendation;
pub mod service;
