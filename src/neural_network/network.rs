use super::input_validation_function::{validate_dimension, validate_hidden_sizes};
use super::layer::initialize_layer;
use super::{Biases, Weights};
use crate::error::ModelError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Weights and biases of a fully-connected feed-forward network.
///
/// The two sequences are index-aligned: `weights[i]` and `biases[i]` belong to layer `i`.
/// Index `0` is the first hidden layer, which consumes the network inputs, and the last index is
/// the output layer. Every layer's weight matrix has as many columns as the previous layer has
/// rows, so the parameters chain from `n_inputs` through each hidden width to `n_outputs`.
///
/// Instances are only produced by `initialize_network` and `initialize_network_with_seed`, and
/// are read-only afterwards.
///
/// # Fields
///
/// - `weights` - Weight matrix of each layer with shape (n_neurons, n_inputs)
/// - `biases` - Bias column of each layer with shape (n_neurons, 1)
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParameters {
    weights: Vec<Weights>,
    biases: Vec<Biases>,
}

impl NetworkParameters {
    /// Returns the weight matrices of all layers, from the first hidden layer to the output layer.
    pub fn get_weights(&self) -> &[Weights] {
        &self.weights
    }

    /// Returns the bias columns of all layers, from the first hidden layer to the output layer.
    pub fn get_biases(&self) -> &[Biases] {
        &self.biases
    }

    /// Number of layers, i.e. the number of hidden layers plus the output layer.
    pub fn n_layers(&self) -> usize {
        self.weights.len()
    }

    /// Width of the input the network consumes.
    pub fn n_inputs(&self) -> usize {
        self.weights[0].ncols()
    }

    /// Width of the output the network produces.
    pub fn n_outputs(&self) -> usize {
        self.weights[self.weights.len() - 1].nrows()
    }

    /// Returns the weight matrix and bias column of one layer.
    ///
    /// # Parameters
    ///
    /// * `index` - Layer index, `0` being the first hidden layer
    ///
    /// # Returns
    ///
    /// * `Option<(&Weights, &Biases)>` - The parameters of the layer, or `None` if `index` is out of range
    pub fn layer(&self, index: usize) -> Option<(&Weights, &Biases)> {
        Some((self.weights.get(index)?, self.biases.get(index)?))
    }

    /// Shape `(n_neurons, n_inputs)` of each layer's weight matrix.
    pub fn layer_shapes(&self) -> Vec<(usize, usize)> {
        self.weights.iter().map(|w| w.dim()).collect()
    }

    /// Total number of weight and bias entries across all layers.
    pub fn param_count(&self) -> usize {
        self.weights
            .iter()
            .zip(self.biases.iter())
            .map(|(w, b)| w.len() + b.len())
            .sum()
    }

    /// Consumes the container and hands back the weight and bias sequences.
    ///
    /// # Returns
    ///
    /// * `(Vec<Weights>, Vec<Biases>)` - Per-layer weight matrices and bias columns, index-aligned
    pub fn into_parts(self) -> (Vec<Weights>, Vec<Biases>) {
        (self.weights, self.biases)
    }

    /// Prints a summary of the network's parameters
    ///
    /// Displays each layer's weight and bias shapes and parameter count in a tabular format
    pub fn summary(&self) {
        let col1_width = 26;
        let col2_width = 18;
        let col3_width = 16;
        let col4_width = 13;
        println!("Network: \"feed_forward\"");
        println!(
            "┏{}┳{}┳{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width),
            "━".repeat(col4_width)
        );
        println!(
            "┃ {:<24} ┃ {:<16} ┃ {:<14} ┃ {:>11} ┃",
            "Layer (type)", "Weight Shape", "Bias Shape", "Param #"
        );
        println!(
            "┡{}╇{}╇{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width),
            "━".repeat(col4_width)
        );

        let last = self.n_layers() - 1;
        for (i, (w, b)) in self.weights.iter().zip(self.biases.iter()).enumerate() {
            // First layer is named "Layer", then "Layer_1", "Layer_2", etc.
            let layer_name = if i == 0 {
                "Layer".to_string()
            } else {
                format!("Layer_{}", i)
            };
            let layer_type = if i == last { "Output" } else { "Hidden" };

            println!(
                "│ {:<24} │ {:<16} │ {:<14} │ {:>11} │",
                format!("{} ({})", layer_name, layer_type),
                format!("{:?}", w.dim()),
                format!("{:?}", b.dim()),
                w.len() + b.len()
            );
        }
        println!(
            "└{}┴{}┴{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width),
            "─".repeat(col4_width)
        );
        let total_params = self.param_count();
        println!(" Total params: {} ({} B)", total_params, total_params * 8); // f64, 8 bytes each
    }
}

/// Initializes the weights and biases of a fully-connected feed-forward network.
///
/// One layer is created per entry of `hidden_sizes`, plus the output layer. The first layer takes
/// `n_inputs` columns, every following layer takes as many columns as the previous layer has
/// neurons, and the output layer has `n_outputs` neurons. Entries are drawn uniformly from
/// `[0, 1)` out of `rng`, layer by layer.
///
/// All dimensions are checked before anything is drawn, so a rejected call leaves `rng` untouched.
///
/// # Parameters
///
/// - `n_inputs` - Width of the network input
/// - `hidden_sizes` - Neuron count of each hidden layer, in order (at least one)
/// - `n_outputs` - Width of the network output
/// - `rng` - Random source the parameters are drawn from
///
/// # Returns
///
/// - `Result<NetworkParameters, ModelError>` - Parameters of `hidden_sizes.len() + 1` layers
///
/// # Errors
///
/// - `ModelError::InvalidArgument` if `hidden_sizes` is empty, or if any dimension is zero
///
/// # Example
/// ```rust
/// use nnfromscratch::neural_network::initialize_network;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let network = initialize_network(5, &[6, 2], 1, &mut rng).unwrap();
///
/// assert_eq!(network.layer_shapes(), vec![(6, 5), (2, 6), (1, 2)]);
/// ```
pub fn initialize_network<R: Rng + ?Sized>(
    n_inputs: usize,
    hidden_sizes: &[usize],
    n_outputs: usize,
    rng: &mut R,
) -> Result<NetworkParameters, ModelError> {
    validate_dimension(n_inputs, "n_inputs")?;
    validate_hidden_sizes(hidden_sizes)?;
    validate_dimension(n_outputs, "n_outputs")?;

    debug!(n_inputs, ?hidden_sizes, n_outputs, "initializing network");

    let n_layers = hidden_sizes.len() + 1;
    let mut weights = Vec::with_capacity(n_layers);
    let mut biases = Vec::with_capacity(n_layers);

    // Layer i reads the width produced by layer i - 1, the first layer reads the network input
    let mut layer_input = n_inputs;
    for &n_neurons in hidden_sizes.iter().chain(std::iter::once(&n_outputs)) {
        let (w, b) = initialize_layer(layer_input, n_neurons, &mut *rng)?;
        weights.push(w);
        biases.push(b);
        layer_input = n_neurons;
    }

    let network = NetworkParameters { weights, biases };

    debug!(
        n_layers = network.n_layers(),
        param_count = network.param_count(),
        "network initialized"
    );

    Ok(network)
}

/// Initializes a network with a generator built from an optional seed.
///
/// # Parameters
///
/// - `n_inputs` - Width of the network input
/// - `hidden_sizes` - Neuron count of each hidden layer, in order (at least one)
/// - `n_outputs` - Width of the network output
/// - `random_state` - Random seed. `Some(seed)` gives reproducible parameters, `None` seeds from the thread-local generator
///
/// # Returns
///
/// - `Result<NetworkParameters, ModelError>` - Parameters of `hidden_sizes.len() + 1` layers
///
/// # Errors
///
/// - `ModelError::InvalidArgument` if `hidden_sizes` is empty, or if any dimension is zero
///
/// # Example
/// ```rust
/// use nnfromscratch::neural_network::initialize_network_with_seed;
///
/// let a = initialize_network_with_seed(10, &[3], 4, Some(42)).unwrap();
/// let b = initialize_network_with_seed(10, &[3], 4, Some(42)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn initialize_network_with_seed(
    n_inputs: usize,
    hidden_sizes: &[usize],
    n_outputs: usize,
    random_state: Option<u64>,
) -> Result<NetworkParameters, ModelError> {
    let mut rng = match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };
    initialize_network(n_inputs, hidden_sizes, n_outputs, &mut rng)
}
