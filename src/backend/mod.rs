//! Backend selection.
//!
//! A backend supplies the primitive lane-operation table the vector types
//! are built on. Exactly one backend is compiled in, chosen by cargo
//! feature at build time:
//!
//! - `portable` (default): lane loops with `wide`-accelerated paths for
//!   the (element, width) register shapes the `wide` crate covers.
//! - no features: the scalar reference backend, plain lane loops.
//!
//! There is no runtime dispatch. [`active_isa`] reports the compiled-in
//! choice as a constant so callers and tests can see which table they got.

pub(crate) mod scalar;

#[cfg(feature = "portable")]
pub(crate) mod portable;

#[cfg(feature = "portable")]
pub(crate) use portable as active;

#[cfg(not(feature = "portable"))]
pub(crate) use scalar as active;

/// The instruction-lowering strategy compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    /// Plain per-lane loops, no vendor intrinsics. The reference backend.
    Scalar,
    /// `wide`-backed register operations where a matching shape exists,
    /// scalar loops elsewhere.
    Portable,
}

impl Isa {
    /// Human-readable backend name.
    pub const fn name(self) -> &'static str {
        match self {
            Isa::Scalar => "scalar",
            Isa::Portable => "portable",
        }
    }
}

impl core::fmt::Display for Isa {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend this build was compiled with.
#[cfg(feature = "portable")]
pub const fn active_isa() -> Isa {
    Isa::Portable
}

/// The backend this build was compiled with.
#[cfg(not(feature = "portable"))]
pub const fn active_isa() -> Isa {
    Isa::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_isa_matches_features() {
        if cfg!(feature = "portable") {
            assert_eq!(active_isa(), Isa::Portable);
        } else {
            assert_eq!(active_isa(), Isa::Scalar);
        }
    }

    #[test]
    fn test_isa_names() {
        assert_eq!(Isa::Scalar.name(), "scalar");
        assert_eq!(Isa::Portable.to_string(), "portable");
    }
}
