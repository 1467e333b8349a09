use crate::ServiceId;

/// A queryable view of a dependency injection container.
///
/// This is the boundary between this crate and the container that actually
/// owns the bindings: any container that can answer "is this identifier
/// bound" and "give me everything bound to it" can be queried through
/// [`resolve_all_option`](crate::resolve_all_option) and
/// [`resolve_all_option_or_else`](crate::resolve_all_option_or_else).
///
/// See the [crate-level documentation](crate) for a complete example of
/// implementing this trait for a map-backed container.
pub trait Container {
    /// Returns true if at least one binding is registered under the
    /// identifier.
    fn is_bound(&self, id: &ServiceId) -> bool;

    /// Returns all instances currently bound to the identifier.
    ///
    /// The order and multiplicity of the returned instances are determined
    /// entirely by the container. Calling this method with an identifier
    /// that is not bound, or with a `T` that does not match the bound
    /// instances, behaves however the container defines; most containers
    /// panic. The resolver functions in this crate only call it behind an
    /// [`is_bound`](Container::is_bound) guard.
    ///
    /// Takes `&mut self` because resolution is allowed to construct
    /// instances or populate caches inside the container.
    fn get_all<T: 'static>(&mut self, id: &ServiceId) -> Vec<T>;
}
