pub mod backdrop;
pub mod blob;
pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod input;
pub mod noise;
pub mod raster;
pub mod target;

pub use backdrop::*;
pub use blob::*;
pub use color::*;
pub use compositor::*;
pub use config::*;
pub use error::BackdropError;
pub use frame::*;
pub use input::*;
pub use noise::*;
pub use raster::*;
pub use target::*;
