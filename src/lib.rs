//! Gmail Reply Memo icon generator
//!
//! Procedurally draws the fixed-size PNG icons used by the Gmail Reply Memo
//! browser extension: a solid blue background, a white circle, and three
//! horizontal strokes that suggest a memo. Small sizes collapse to a single
//! centered dot.
//!
//! # Example
//!
//! ```no_run
//! use memoicon::{GeneratorConfig, generator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::default();
//! let icons = generator::generate(&config, |icon| {
//!     println!("Created: {}", icon.path.display());
//! })?;
//! assert_eq!(icons.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub mod rendering;

pub use generator::{generate, GeneratedIcon};
pub use rendering::{render, render_icon, render_with_palette, Icon};

/// Sizes at or above this threshold get the detailed circle-and-lines design
pub const DETAIL_THRESHOLD: u32 = 48;

/// Sizes of the extension's icon set, largest first
pub const STANDARD_SIZES: [Size; 3] = [Size::ICON_128, Size::ICON_48, Size::ICON_16];

/// Pixel dimension of a square canvas
///
/// Any positive integer is accepted; zero is rejected at construction.
///
/// ```
/// let size = memoicon::Size::new(128).unwrap();
/// assert_eq!(size.get(), 128);
/// assert!(memoicon::Size::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(NonZeroU32);

impl Size {
    pub const ICON_128: Size = Size(NonZeroU32::MIN.saturating_add(127));
    pub const ICON_48: Size = Size(NonZeroU32::MIN.saturating_add(47));
    pub const ICON_16: Size = Size(NonZeroU32::MIN.saturating_add(15));

    pub fn new(px: u32) -> Result<Self> {
        NonZeroU32::new(px).map(Size).ok_or(Error::InvalidSize(px))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether this size is large enough for the circle-and-lines design
    pub fn is_detailed(self) -> bool {
        self.get() >= DETAIL_THRESHOLD
    }
}

impl TryFrom<u32> for Size {
    type Error = Error;

    fn try_from(px: u32) -> Result<Self> {
        Size::new(px)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.get())
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#1a73e8`
    pub const BLUE: Color = Color::rgb(26, 115, 232);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Color { r, g, b }
    }
}

/// The two colors every icon is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Canvas fill
    pub background: Color,
    /// Circle, dot and memo strokes
    pub foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLUE,
            foreground: Color::WHITE,
        }
    }
}

/// One icon to produce: a size and the file name it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: Size,
    pub file_name: String,
}

impl IconTarget {
    /// Target named `icon{px}.png`, the naming the extension manifest expects
    pub fn standard(px: u32) -> Result<Self> {
        Ok(Self {
            size: Size::new(px)?,
            file_name: format!("icon{px}.png"),
        })
    }

    /// The fixed 128/48/16 icon set
    pub fn standard_set() -> Vec<IconTarget> {
        STANDARD_SIZES
            .into_iter()
            .map(|size| IconTarget {
                size,
                file_name: format!("icon{}.png", size.get()),
            })
            .collect()
    }
}

/// Configuration for a generator run
///
/// The defaults reproduce the extension's icon set:
/// - `out_dir` is `icons`, relative to the working directory
/// - `targets` is the 128/48/16 set, written in that order
/// - `palette` is blue background with white foreground
///
/// ```
/// let cfg = memoicon::GeneratorConfig::default();
/// assert_eq!(cfg.targets.len(), 3);
/// assert_eq!(cfg.out_dir, std::path::PathBuf::from("icons"));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory the icons are written into; created if absent
    pub out_dir: PathBuf,
    /// Icons to render, in order
    pub targets: Vec<IconTarget>,
    /// Colors used for every icon
    pub palette: Palette,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            targets: IconTarget::standard_set(),
            palette: Palette::default(),
        }
    }
}

/// Check that PNG encoding is compiled into this build
///
/// Called before any filesystem side effect so a build without the `png`
/// feature fails cleanly with [`Error::MissingCapability`].
pub fn ensure_png_support() -> Result<()> {
    if cfg!(feature = "png") {
        Ok(())
    } else {
        Err(Error::MissingCapability(
            "PNG encoder not compiled in (built without the `png` feature)".into(),
        ))
    }
}
