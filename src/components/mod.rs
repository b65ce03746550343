//! UI Components
//!
//! Pieces of the create point page.

mod address_select;
mod file_dropzone;
mod items_grid;
mod point_map;

pub use address_select::AddressSelect;
pub use file_dropzone::FileDropzone;
pub use items_grid::ItemsGrid;
pub use point_map::PointMap;
