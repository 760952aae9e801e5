use russell_tensor::Mandel;

/// Defines the geometry idealization (plane-strain or 3D)
///
/// **Note:** The radial return needs the out-of-plane strain component to be known;
/// thus, 2D problems are always **plane-strain**.
#[derive(Clone, Copy, Debug)]
pub struct Idealization {
    /// Indicates 2D (plane-strain) instead of 3D
    pub two_dim: bool,
}

impl Idealization {
    /// Allocates a new instance
    ///
    /// * `2D`: plane-strain
    /// * `3D`: no idealization
    pub fn new(ndim: usize) -> Self {
        Idealization { two_dim: ndim == 2 }
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        if self.two_dim {
            2
        } else {
            3
        }
    }

    /// Returns the symmetric Mandel representation associated with the idealization
    ///
    /// # Results
    ///
    /// * `2D`: [Mandel::Symmetric2D]
    /// * `3D`: [Mandel::Symmetric]
    pub fn mandel(&self) -> Mandel {
        if self.two_dim {
            Mandel::Symmetric2D
        } else {
            Mandel::Symmetric
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
