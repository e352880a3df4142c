use crate::error::GraphError;

pub type GraphResult<T, N> = Result<T, GraphError<N>>;
