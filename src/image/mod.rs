pub mod io;
pub mod regions;
pub mod traits;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::regions::{crop_cell, extract_regions, upscale, RegionOptions};
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
