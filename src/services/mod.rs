pub mod palette;
pub mod search;

pub use palette::{PaletteOutcome, PaletteResolver};
pub use search::CompanySearchService;
