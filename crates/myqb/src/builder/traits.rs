use crate::error::BuildResult;

/// Base trait for statement builders.
pub trait SqlBuilder {
    /// Render the complete statement, terminated with `;`.
    fn build(&self) -> BuildResult<String>;
}
