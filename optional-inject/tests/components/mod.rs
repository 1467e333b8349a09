use std::{any::Any, cell::Cell, collections::HashMap};

use optional_inject::{Container, ServiceId};

type Binding = Box<dyn Fn() -> Box<dyn Any>>;

/// A map-backed container, one binding list per identifier.
///
/// Counts how often each query method is called so tests can assert that a
/// resolution touches the container exactly as often as expected.
#[derive(Default)]
pub(crate) struct Registry {
    bindings: HashMap<ServiceId, Vec<Binding>>,
    lookups: Cell<usize>,
    resolutions: Cell<usize>,
}

impl Registry {
    pub(crate) fn bind<T: 'static>(
        &mut self,
        id: impl Into<ServiceId>,
        factory: impl Fn() -> T + 'static,
    ) {
        self.bindings
            .entry(id.into())
            .or_default()
            .push(Box::new(move || Box::new(factory())));
    }

    #[allow(dead_code)]
    pub(crate) fn bind_value<T: 'static + Clone>(&mut self, id: impl Into<ServiceId>, instance: T) {
        self.bind(id, move || instance.clone());
    }

    #[allow(dead_code)]
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.get()
    }

    #[allow(dead_code)]
    pub(crate) fn resolutions(&self) -> usize {
        self.resolutions.get()
    }
}

impl Container for Registry {
    fn is_bound(&self, id: &ServiceId) -> bool {
        self.lookups.set(self.lookups.get() + 1);

        self.bindings
            .get(id)
            .is_some_and(|bindings| !bindings.is_empty())
    }

    fn get_all<T: 'static>(&mut self, id: &ServiceId) -> Vec<T> {
        self.resolutions.set(self.resolutions.get() + 1);

        self.bindings
            .get(id)
            .map(|bindings| {
                bindings
                    .iter()
                    .map(|binding| {
                        *binding().downcast().unwrap_or_else(|_| {
                            panic!("bound instance does not match the requested type")
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Foo {
    pub(crate) name: &'static str,
}

impl Foo {
    pub(crate) fn new() -> Foo {
        Foo { name: "foo" }
    }
}

#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Bar {
    pub(crate) name: String,
}

impl Bar {
    #[allow(dead_code)]
    pub(crate) fn new(tag: &str) -> Bar {
        Bar {
            name: format!("bar-{}", tag),
        }
    }
}

/// Never bound in any test.
#[allow(dead_code)]
pub(crate) struct OptionalService;
