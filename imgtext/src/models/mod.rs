mod location;
mod ocr;
mod request;
mod response;

pub use location::*;
pub use ocr::*;
pub use request::*;
pub use response::*;
