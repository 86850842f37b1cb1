pub mod http_adapter;

pub use http_adapter::HttpBrandDirectory;
