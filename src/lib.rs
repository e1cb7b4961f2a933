pub mod canvas;
pub mod color_utils;
pub mod converter;
pub mod error;
pub mod group;
pub mod mapper;
pub mod math_utils;
pub mod mesh;
pub mod models;
pub mod package;
pub mod scene;
pub mod shapes;
pub mod templates;
pub mod units;
pub mod utils;

pub use canvas::{Canvas, CanvasStyle};
pub use color_utils::{color_to_hex, ColorSpec, Paint};
pub use converter::{
    dir_to_pptx, dir_to_zip, pptx_to_dir, pptx_to_zip, zip_to_dir, zip_to_pptx, ArchiveFormat,
};
pub use error::{Error, Result};
pub use group::Group;
pub use mapper::{CoordinateMapper, PlotArea, PlotAreaCache};
pub use models::{Figure, PlotObject};
pub use package::{assemble, new_presentation};
pub use scene::{savefig, ConversionSession, SaveOptions, SceneBuilder};
pub use shapes::{Image, Line, Polygon, Rectangle, Shape, Text};
pub use units::SlideSize;
pub use utils::pretty_print_xml;
