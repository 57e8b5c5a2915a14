/// The runtime value type.
///
/// Defines [`core::Value`], the dynamically-typed result of executing an
/// expression, together with truthiness, display and numeric promotion.
pub mod core;
