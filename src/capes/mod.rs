pub mod fetch;
pub mod provider;

pub use fetch::{CapeDiagnostic, CapeFetch, CapeFetcher};
pub use provider::CapeProvider;
