use sapling_core::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("the element tree has no root")]
    EmptyRoot,
}
