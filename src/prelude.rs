pub use crate::error::ModelError;
pub use crate::neural_network::{
    NetworkParameters, initialize_layer, initialize_network, initialize_network_with_seed,
};
