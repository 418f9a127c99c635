/*!
## Rust Machine Module

This Rust module walks the syntax tree and executes it. There is no
compile step; every statement runs straight from the tree against
one `Runtime`.

*/

mod label;
mod runtime;
mod val;

pub use label::LabelEnv;
pub use runtime::Flow;
pub use runtime::Registers;
pub use runtime::Runtime;
pub use val::LoopId;
pub use val::Number;
pub use val::Trigger;
pub use val::Val;
