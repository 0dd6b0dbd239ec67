//! Which side of the pool a swap sells into.

/// Direction of a swap relative to the pool's `(token-0, token-1)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token-0, receive token-1.
    AToB,
    /// Sell token-1, receive token-0.
    BToA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}
