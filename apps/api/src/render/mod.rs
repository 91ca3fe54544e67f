// Presentation layer over the parsed outline.
// Turns a Document into a layout-ready view; pure, no I/O.

pub mod emphasis;
pub mod view;

pub use view::CvView;
