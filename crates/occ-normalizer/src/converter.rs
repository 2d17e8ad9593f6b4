//! Converter trait.

/// Converts a source document into a target document.
///
/// Converters are stateless and infallible; anything that can fail (I/O,
/// parsing, translation lookups) happens before conversion starts.
///
/// # Thread Safety
///
/// Implementations must be Send + Sync so one converter can serve
/// concurrent conversions.
///
/// # Examples
///
/// ```no_run
/// use occ_core::{model, wire};
/// use occ_normalizer::Converter;
///
/// fn convert_all(
///     converter: &dyn Converter<wire::Configuration, model::Configuration>,
///     sources: &[wire::Configuration],
/// ) -> Vec<model::Configuration> {
///     sources.iter().map(|source| converter.convert(source)).collect()
/// }
/// ```
pub trait Converter<S, T>: Send + Sync {
    /// Convert into a fresh target.
    fn convert(&self, source: &S) -> T;

    /// Convert into an existing target, appending to its collections
    /// rather than replacing them.
    fn convert_into(&self, source: &S, target: &mut T);
}
