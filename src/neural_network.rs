/// Module that contains argument checks shared by the initializers
mod input_validation_function;
/// Module that contains the single-layer initializer
pub mod layer;
/// Module that contains the whole-network initializer and its parameter container
pub mod network;

pub use layer::*;
pub use network::*;

use ndarray::Array2;

/// Type alias for a weight matrix with shape (n_neurons, n_inputs)
pub type Weights = Array2<f64>;

/// Type alias for a bias column with shape (n_neurons, 1)
pub type Biases = Array2<f64>;
