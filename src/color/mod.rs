//! Size-to-color mapping

mod contrast;
mod gradient;
mod scale;

pub(crate) use gradient::{Gradient, SIZE_SPECTRUM};
pub(crate) use scale::SizePalette;
