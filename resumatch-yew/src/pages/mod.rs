mod screening_page;

pub use screening_page::ScreeningPage;
