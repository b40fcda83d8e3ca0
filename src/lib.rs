/// Module `error` contains the error type returned by every fallible operation in this crate.
pub mod error;

pub use error::ModelError;

/// Module `neural_network` builds the parameter storage of fully-connected feed-forward networks.
///
/// A network taking `n_inputs` features, with hidden layers of widths `hidden_sizes`, and
/// producing `n_outputs` values is described by one weight matrix and one bias column per layer.
/// Layer `i` has a weight matrix of shape `(neurons_i, inputs_i)` and a bias of shape
/// `(neurons_i, 1)`, where `inputs_i` is the neuron count of layer `i - 1` (or `n_inputs` for
/// the first layer). All entries are drawn uniformly from `[0, 1)`.
///
/// Only initialization is provided: there is no forward pass, no training and no persistence.
///
/// # Core Functions
///
/// - `initialize_layer` - Weight matrix and bias column for a single layer
/// - `initialize_network` - Per-layer weights and biases for the whole network, drawn from a caller-provided random source
/// - `initialize_network_with_seed` - Same as `initialize_network`, but builds its own `StdRng` from an optional seed
///
/// # Example
/// ```rust
/// use nnfromscratch::neural_network::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let network = initialize_network(10, &[3], 4, &mut rng).unwrap();
///
/// assert_eq!(network.n_layers(), 2);
/// assert_eq!(network.get_weights()[0].dim(), (3, 10));
/// assert_eq!(network.get_biases()[1].dim(), (4, 1));
///
/// // Display the layer table
/// network.summary();
/// ```
pub mod neural_network;

/// Module `prelude` re-exports the most commonly used items of this crate.
pub mod prelude;
