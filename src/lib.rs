//! Public library API for typed binary tag trees and their wire codec.

/// Tag values, compound containers, and the stream codec.
pub mod tag;
