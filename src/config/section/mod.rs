//! Configuration section definitions.
//!
//! Each module corresponds to a section in `svgmedia.toml`:
//!
//! | Module        | TOML Section    | Purpose                              |
//! |---------------|-----------------|--------------------------------------|
//! | `uploads`     | `[uploads]`     | Upload root and public base URL      |
//! | `orientation` | `[orientation]` | How declared sizes are compared      |
//! | `styles`      | `[styles]`      | Which presentation fixes are emitted |

mod orientation;
mod styles;
mod uploads;

pub use orientation::{CompareMode, OrientationConfig};
pub use styles::StylesConfig;
pub use uploads::UploadsConfig;
