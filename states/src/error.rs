use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {name}")]
    StateNotFound { name: &'static str },
    #[error("Compute not found: {name}")]
    ComputeNotFound { name: &'static str },
    #[error("Command not found: {name}")]
    CommandNotFound { name: &'static str },
    #[error("No async runtime available to run command {name}")]
    NoRuntime { name: &'static str },
    #[error("Cycle detected in compute dependencies: {route}")]
    DependencyCycle { route: String },
}

impl Error {
    pub fn state_not_found<T: ?Sized>() -> Self {
        Self::StateNotFound {
            name: std::any::type_name::<T>(),
        }
    }

    pub fn compute_not_found<T: ?Sized>() -> Self {
        Self::ComputeNotFound {
            name: std::any::type_name::<T>(),
        }
    }

    pub fn command_not_found<T: ?Sized>() -> Self {
        Self::CommandNotFound {
            name: std::any::type_name::<T>(),
        }
    }
}
