mod screening_provider;

pub use screening_provider::{ScreeningProvider, ScreeningProviderProps};
