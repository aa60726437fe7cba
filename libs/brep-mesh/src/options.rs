//! Conversion options building on the shared `config` crate.

use crate::error::ConvertError;
use config::constants::{DEFAULT_MERGE_PRECISION, MAX_MERGE_PRECISION};

/// Options for [`from_body_with_options`](crate::from_body_with_options).
///
/// # Examples
/// ```
/// use brep_mesh::ConvertOptions;
/// let options = ConvertOptions::default();
/// assert!(options.merge_lumps());
/// assert_eq!(options.precision(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    merge_lumps: bool,
    precision: u32,
}

impl ConvertOptions {
    /// Creates options with an explicit merge precision.
    ///
    /// # Examples
    /// ```
    /// use brep_mesh::ConvertOptions;
    /// assert!(ConvertOptions::with_precision(3).is_ok());
    /// assert!(ConvertOptions::with_precision(40).is_err());
    /// ```
    pub fn with_precision(precision: u32) -> Result<Self, ConvertError> {
        if precision > MAX_MERGE_PRECISION {
            return Err(ConvertError::InvalidPrecision {
                precision,
                max: MAX_MERGE_PRECISION,
            });
        }
        Ok(Self {
            precision,
            ..Self::default()
        })
    }

    /// Returns a copy with lump merging switched on or off.
    pub fn with_merge_lumps(self, merge_lumps: bool) -> Self {
        Self {
            merge_lumps,
            ..self
        }
    }

    /// Whether one mesh is built for the whole body instead of one per lump.
    #[inline]
    pub fn merge_lumps(&self) -> bool {
        self.merge_lumps
    }

    /// Decimal places used to key vertices when welding; never above
    /// [`MAX_MERGE_PRECISION`].
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            merge_lumps: true,
            precision: DEFAULT_MERGE_PRECISION,
        }
    }
}
