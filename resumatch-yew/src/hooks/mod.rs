mod use_screening;

pub use use_screening::{use_screening, ScreeningContext};
