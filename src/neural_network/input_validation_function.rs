use crate::error::ModelError;

/// Validates that a layer dimension is positive.
///
/// # Parameters
///
/// - `value` - The dimension to validate
/// - `param_name` - The name of the parameter (for error messages)
///
/// # Returns
///
/// - `Ok(())` if the dimension is greater than zero
/// - `Err(ModelError::InvalidArgument)` if the dimension is zero
pub(super) fn validate_dimension(value: usize, param_name: &str) -> Result<(), ModelError> {
    if value == 0 {
        return Err(ModelError::InvalidArgument(format!(
            "{} must be a positive integer, got {}",
            param_name, value
        )));
    }
    Ok(())
}

/// Validates the sequence of hidden-layer widths.
///
/// At least one hidden layer is required, and every width must be positive.
///
/// # Parameters
///
/// * `hidden_sizes` - Neuron count of each hidden layer, in order
///
/// # Returns
///
/// - `Ok(())` if the sequence is non-empty and contains only positive widths
/// - `Err(ModelError::InvalidArgument)` otherwise, naming the first offending layer
pub(super) fn validate_hidden_sizes(hidden_sizes: &[usize]) -> Result<(), ModelError> {
    if hidden_sizes.is_empty() {
        return Err(ModelError::InvalidArgument(
            "hidden_sizes must contain at least one hidden layer".to_string(),
        ));
    }

    for (i, &size) in hidden_sizes.iter().enumerate() {
        validate_dimension(size, &format!("hidden_sizes[{}]", i))?;
    }
    Ok(())
}
