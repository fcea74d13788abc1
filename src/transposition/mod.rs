//! Transposition ciphers: the characters stay, their order changes.

pub mod columns;
pub mod myszkowski;
pub mod rail_fence;
pub mod route;

pub use myszkowski::{myszkowski_decrypt, myszkowski_encrypt, Myszkowski};
pub use rail_fence::{rail_fence_decrypt, rail_fence_encrypt, RailFence};
pub use route::{
    route_decrypt, route_encrypt, route_positions, Route, RouteCipher, RouteConfig,
    SpiralDirection,
};
