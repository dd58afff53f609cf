/// Marker trait for feature state.
///
/// States are replaced wholesale by their reducer, so they must be cheap
/// to compare and hold everything the view needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
