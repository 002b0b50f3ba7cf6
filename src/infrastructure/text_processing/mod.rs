mod composite_file_loader;
mod csv_adapter;
mod image_adapter;
mod ofx_adapter;
mod pdf_adapter;
mod recursive_character_splitter;
mod spreadsheet_adapter;
mod table_render;

pub use composite_file_loader::CompositeFileLoader;
pub use csv_adapter::CsvAdapter;
pub use image_adapter::ImageAdapter;
pub use ofx_adapter::OfxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use recursive_character_splitter::RecursiveCharacterSplitter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use table_render::render_table;
