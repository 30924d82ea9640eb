//! The elementwise operation table.
//!
//! Every binary operation comes in four call shapes: the std operator
//! trait for a vector rhs and for a scalar rhs (the scalar broadcasts),
//! the corresponding assign trait for both, and a `masked_*` /
//! `masked_*_assign` pair. Masked forms all share one rule: a lane
//! deselected by the mask keeps the left operand's original value, and
//! nothing in a deselected lane can fault (masked division replaces
//! deselected divisors with one before dividing).
//!
//! The macros below stamp those shapes out from a backend primitive name;
//! the submodules invoke them per operation family and hand-write the
//! pieces that do not fit the pattern (unary ops, comparisons, the
//! increment/decrement family).

/// Std operator trait + assign trait + masked pair, for one backend
/// primitive. A row may omit the masked names and write that pair by
/// hand, for ops whose evaluation must itself be guarded by the mask
/// rather than just the write-back.
macro_rules! lane_binary_ops {
    ($(
        $trait:ident :: $method:ident / $assign_trait:ident :: $assign_method:ident
            => $backend:ident [$bound:ident] $(, $masked:ident, $masked_assign:ident)?;
    )+) => {
        $(
            impl<T, const N: usize> core::ops::$trait for Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::new(crate::backend::active::$backend(
                        self.to_array(),
                        rhs.to_array(),
                    ))
                }
            }

            impl<T, const N: usize> core::ops::$trait<T> for Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    core::ops::$trait::$method(self, Self::splat(rhs))
                }
            }

            impl<T, const N: usize> core::ops::$assign_trait for Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = core::ops::$trait::$method(*self, rhs);
                }
            }

            impl<T, const N: usize> core::ops::$assign_trait<T> for Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = core::ops::$trait::$method(*self, rhs);
                }
            }

            $(
                impl<T, const N: usize> Vector<T, N>
                where
                    T: $bound,
                    LaneCount<N>: SupportedLaneCount,
                {
                    #[doc = concat!(
                        "Masked `", stringify!($method),
                        "`: lanes deselected by `mask` keep `self`'s value."
                    )]
                    #[inline]
                    pub fn $masked(self, mask: Mask<N>, rhs: impl Into<Self>) -> Self {
                        mask.select(core::ops::$trait::$method(self, rhs.into()), self)
                    }

                    #[doc = concat!(
                        "In-place [`", stringify!($masked), "`](Self::", stringify!($masked), ")."
                    )]
                    #[inline]
                    pub fn $masked_assign(&mut self, mask: Mask<N>, rhs: impl Into<Self>) {
                        *self = self.$masked(mask, rhs);
                    }
                }
            )?
        )+
    };
}

/// Inherent-method operations (no std trait), same four shapes.
macro_rules! lane_binary_methods {
    ($(
        $(#[$meta:meta])*
        $name:ident / $assign:ident => $backend:ident [$bound:ident],
            $masked:ident, $masked_assign:ident;
    )+) => {
        $(
            impl<T, const N: usize> Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                $(#[$meta])*
                #[inline]
                pub fn $name(self, rhs: impl Into<Self>) -> Self {
                    Self::new(crate::backend::active::$backend(
                        self.to_array(),
                        rhs.into().to_array(),
                    ))
                }

                #[doc = concat!("In-place [`", stringify!($name), "`](Self::", stringify!($name), ").")]
                #[inline]
                pub fn $assign(&mut self, rhs: impl Into<Self>) {
                    *self = self.$name(rhs);
                }

                #[doc = concat!(
                    "Masked `", stringify!($name),
                    "`: lanes deselected by `mask` keep `self`'s value."
                )]
                #[inline]
                pub fn $masked(self, mask: Mask<N>, rhs: impl Into<Self>) -> Self {
                    mask.select(self.$name(rhs), self)
                }

                #[doc = concat!(
                    "In-place [`", stringify!($masked), "`](Self::", stringify!($masked), ")."
                )]
                #[inline]
                pub fn $masked_assign(&mut self, mask: Mask<N>, rhs: impl Into<Self>) {
                    *self = self.$masked(mask, rhs);
                }
            }
        )+
    };
}

/// Horizontal reductions: plain, seeded, masked, masked+seeded. The
/// masked forms fill deselected lanes with the operation's identity
/// before folding, so an all-false mask yields the identity itself.
macro_rules! lane_reductions {
    ($(
        $(#[$meta:meta])*
        $name:ident / $with:ident / $masked:ident / $masked_with:ident
            => $backend:ident [$bound:ident], $combine:ident, $identity:expr;
    )+) => {
        $(
            impl<T, const N: usize> Vector<T, N>
            where
                T: $bound,
                LaneCount<N>: SupportedLaneCount,
            {
                $(#[$meta])*
                #[inline]
                pub fn $name(&self) -> T {
                    crate::backend::active::$backend(self.to_array())
                }

                #[doc = concat!(
                    "[`", stringify!($name), "`](Self::", stringify!($name),
                    ") with `seed` folded into the result."
                )]
                #[inline]
                pub fn $with(&self, seed: T) -> T {
                    self.$name().$combine(seed)
                }

                #[doc = concat!(
                    "[`", stringify!($name), "`](Self::", stringify!($name),
                    ") over the selected lanes only; an all-false mask yields ",
                    "the operation's identity."
                )]
                #[inline]
                pub fn $masked(&self, mask: Mask<N>) -> T {
                    mask.select(*self, Vector::splat($identity)).$name()
                }

                #[doc = concat!(
                    "[`", stringify!($masked), "`](Self::", stringify!($masked),
                    ") with `seed` folded into the result."
                )]
                #[inline]
                pub fn $masked_with(&self, mask: Mask<N>, seed: T) -> T {
                    self.$masked(mask).$combine(seed)
                }
            }
        )+
    };
}

mod arith;
mod bits;
mod cmp;
mod fused;
mod reduce;
