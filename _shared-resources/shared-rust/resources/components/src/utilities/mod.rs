// Utilities module
// Helper functions shared by the elements and style sheets

pub mod helpers;

pub use helpers::*;
