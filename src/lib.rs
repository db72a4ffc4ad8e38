pub mod formats {
    pub use lhtools_formats::*;
}

pub mod renderer {
    pub use lhtools_renderer::*;
}

pub mod prelude {
    pub use super::{formats::*, renderer::*};
}
