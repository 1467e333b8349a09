use crate::{Container, ServiceId};

/// Resolves all instances bound to the given identifier, if any binding
/// exists.
///
/// Returns `None` when the identifier is not bound. This is the
/// non-throwing counterpart to calling [`Container::get_all`] directly:
/// the lookup is guarded by [`Container::is_bound`], so a missing binding
/// is an ordinary `None` instead of whatever failure the container raises
/// for an unknown identifier. Anything the container raises while actually
/// resolving bound instances propagates unmodified.
///
/// When a binding exists, the result is exactly the sequence returned by
/// the container, with no filtering, reordering or transformation.
///
/// The query is pure and owns no state: two consecutive calls against an
/// unchanged container return equal results. It registers no subscription
/// of its own; callers inside a reactive framework run it within the
/// framework's subscription scope so it is re-evaluated whenever the
/// ambient container reference changes.
///
/// # Example
///
/// ```rust
/// use optional_inject::{resolve_all_option, Container, ServiceId};
/// # use std::{any::Any, collections::HashMap};
/// #
/// # #[derive(Default)]
/// # struct Registry {
/// #     bindings: HashMap<ServiceId, Vec<Box<dyn Fn() -> Box<dyn Any>>>>,
/// # }
/// #
/// # impl Registry {
/// #     fn bind<T: 'static + Clone>(&mut self, id: impl Into<ServiceId>, instance: T) {
/// #         self.bindings
/// #             .entry(id.into())
/// #             .or_default()
/// #             .push(Box::new(move || Box::new(instance.clone())));
/// #     }
/// # }
/// #
/// # impl Container for Registry {
/// #     fn is_bound(&self, id: &ServiceId) -> bool {
/// #         self.bindings.get(id).is_some_and(|bindings| !bindings.is_empty())
/// #     }
/// #
/// #     fn get_all<T: 'static>(&mut self, id: &ServiceId) -> Vec<T> {
/// #         self.bindings
/// #             .get(id)
/// #             .map(|bindings| {
/// #                 bindings
/// #                     .iter()
/// #                     .map(|binding| *binding().downcast().ok().unwrap())
/// #                     .collect()
/// #             })
/// #             .unwrap_or_default()
/// #     }
/// # }
/// #
/// let mut container = Registry::default();
/// container.bind("greeting", "hello");
/// container.bind("greeting", "world");
///
/// assert_eq!(
///     resolve_all_option::<&str, _>(&mut container, "greeting"),
///     Some(vec!["hello", "world"])
/// );
/// assert_eq!(resolve_all_option::<i32, _>(&mut container, "number"), None);
/// ```
pub fn resolve_all_option<T: 'static, C>(
    container: &mut C,
    id: impl Into<ServiceId>,
) -> Option<Vec<T>>
where
    C: Container,
{
    resolve_all_option_or_else(container, id, |_| None)
}

/// Same as [`resolve_all_option`], but with a caller-supplied fallback.
///
/// The fallback runs only when the identifier is not bound. It receives
/// the container, so a substitute can itself be resolved from other
/// bindings, and its result is returned unchanged. [`resolve_all_option`]
/// is this function with the `|_| None` fallback.
///
/// # Example
///
/// ```rust
/// use optional_inject::{resolve_all_option, resolve_all_option_or_else, Container, ServiceId};
/// # use std::{any::Any, collections::HashMap};
/// #
/// # #[derive(Default)]
/// # struct Registry {
/// #     bindings: HashMap<ServiceId, Vec<Box<dyn Fn() -> Box<dyn Any>>>>,
/// # }
/// #
/// # impl Registry {
/// #     fn bind<T: 'static + Clone>(&mut self, id: impl Into<ServiceId>, instance: T) {
/// #         self.bindings
/// #             .entry(id.into())
/// #             .or_default()
/// #             .push(Box::new(move || Box::new(instance.clone())));
/// #     }
/// # }
/// #
/// # impl Container for Registry {
/// #     fn is_bound(&self, id: &ServiceId) -> bool {
/// #         self.bindings.get(id).is_some_and(|bindings| !bindings.is_empty())
/// #     }
/// #
/// #     fn get_all<T: 'static>(&mut self, id: &ServiceId) -> Vec<T> {
/// #         self.bindings
/// #             .get(id)
/// #             .map(|bindings| {
/// #                 bindings
/// #                     .iter()
/// #                     .map(|binding| *binding().downcast().ok().unwrap())
/// #                     .collect()
/// #             })
/// #             .unwrap_or_default()
/// #     }
/// # }
/// #
/// let mut container = Registry::default();
/// container.bind("default-greeting", "hello");
///
/// // not bound: substitute with instances resolved from another binding
/// let greetings = resolve_all_option_or_else::<&str, _, _>(&mut container, "greetings", |container| {
///     resolve_all_option(container, "default-greeting")
/// });
///
/// assert_eq!(greetings, Some(vec!["hello"]));
/// ```
pub fn resolve_all_option_or_else<T: 'static, C, F>(
    container: &mut C,
    id: impl Into<ServiceId>,
    fallback: F,
) -> Option<Vec<T>>
where
    C: Container,
    F: FnOnce(&mut C) -> Option<Vec<T>>,
{
    let id = id.into();

    if container.is_bound(&id) {
        return Some(container.get_all(&id));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("no binding found for: {:?}", id);

    fallback(container)
}
