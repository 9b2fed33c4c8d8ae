pub mod video;

pub use video::{Catalog, VideoRecord};
