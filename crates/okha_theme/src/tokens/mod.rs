//! Design tokens for theming
//!
//! - [`ThemeVariable`]: the closed set of CSS variable names
//! - [`VariableSet`]: a complete value for every variable
//! - [`VariableOverrides`]: a partial set layered on top

mod overrides;
mod variable;

pub use overrides::*;
pub use variable::*;
