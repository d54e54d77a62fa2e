use crate::error::Error;
use ordered_float::OrderedFloat;

/// Key type of the visualizer pages: any finite number typed by the user
pub type NumericKey = OrderedFloat<f64>;

/// Parse user input into a key. Empty, non-numeric and non-finite input
/// (NaN, infinities) is rejected before it can reach a tree
pub fn parse_key(input: &str) -> Result<NumericKey, Error> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidKey(input.to_owned()))?;
    if !value.is_finite() {
        return Err(Error::InvalidKey(input.to_owned()));
    }
    Ok(OrderedFloat(value))
}
