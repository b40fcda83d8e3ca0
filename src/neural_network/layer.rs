use super::input_validation_function::validate_dimension;
use super::{Biases, Weights};
use crate::error::ModelError;
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, StandardUniform};
use tracing::trace;

/// Initializes the parameters of one fully-connected layer.
///
/// Every entry of the weight matrix and of the bias column is an independent draw from the
/// uniform distribution over `[0, 1)`. Weights are drawn first in row-major order, then the
/// biases, so the output is fully determined by the state of `rng`.
///
/// # Parameters
///
/// - `n_inputs` - Width of the input presented to the layer
/// - `n_neurons` - Number of neurons in the layer
/// - `rng` - Random source the entries are drawn from
///
/// # Returns
///
/// - `Result<(Weights, Biases), ModelError>` - The weight matrix with shape (n_neurons, n_inputs) and the bias column with shape (n_neurons, 1)
///
/// # Errors
///
/// - `ModelError::InvalidArgument` if `n_inputs` or `n_neurons` is zero
///
/// # Example
/// ```rust
/// use nnfromscratch::neural_network::initialize_layer;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let (weights, biases) = initialize_layer(10, 5, &mut rng).unwrap();
///
/// assert_eq!(weights.dim(), (5, 10));
/// assert_eq!(biases.dim(), (5, 1));
/// ```
pub fn initialize_layer<R: Rng + ?Sized>(
    n_inputs: usize,
    n_neurons: usize,
    rng: &mut R,
) -> Result<(Weights, Biases), ModelError> {
    validate_dimension(n_inputs, "n_inputs")?;
    validate_dimension(n_neurons, "n_neurons")?;

    let weights: Weights = Array2::from_shape_simple_fn((n_neurons, n_inputs), || {
        StandardUniform.sample(&mut *rng)
    });
    let biases: Biases =
        Array2::from_shape_simple_fn((n_neurons, 1), || StandardUniform.sample(&mut *rng));

    trace!(n_inputs, n_neurons, "initialized layer");

    Ok((weights, biases))
}
