pub mod footer;
pub mod header;
pub mod options_list;
pub mod search_box;
pub mod swatch_gallery;
