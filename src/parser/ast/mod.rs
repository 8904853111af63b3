mod declaration;
pub mod expression;
mod program;
pub mod statement;
mod subroutine;

pub use self::declaration::*;
pub use self::expression::*;
pub use self::program::*;
pub use self::statement::*;
pub use self::subroutine::*;
