use std::{any::Any, collections::HashMap, rc::Rc};

use optional_inject::{resolve_all_option, Container, ServiceId};

trait Service {
    fn hello(&self) -> &str;
}

struct EnglishService;

impl Service for EnglishService {
    fn hello(&self) -> &str {
        "Hello World!"
    }
}

struct FrenchService;

impl Service for FrenchService {
    fn hello(&self) -> &str {
        "Bonjour le monde !"
    }
}

#[derive(Default)]
struct Registry {
    bindings: HashMap<ServiceId, Vec<Box<dyn Fn() -> Box<dyn Any>>>>,
}

impl Registry {
    fn bind<T: 'static + Clone>(&mut self, id: impl Into<ServiceId>, instance: T) {
        self.bindings
            .entry(id.into())
            .or_default()
            .push(Box::new(move || Box::new(instance.clone())));
    }
}

impl Container for Registry {
    fn is_bound(&self, id: &ServiceId) -> bool {
        self.bindings
            .get(id)
            .is_some_and(|bindings| !bindings.is_empty())
    }

    fn get_all<T: 'static>(&mut self, id: &ServiceId) -> Vec<T> {
        self.bindings
            .get(id)
            .map(|bindings| {
                bindings
                    .iter()
                    .map(|binding| *binding().downcast().ok().unwrap())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn main() {
    let mut registry = Registry::default();

    let services = ServiceId::name("services");
    registry.bind::<Rc<dyn Service>>(services.clone(), Rc::new(EnglishService));
    registry.bind::<Rc<dyn Service>>(services.clone(), Rc::new(FrenchService));

    let services = resolve_all_option::<Rc<dyn Service>, _>(&mut registry, services)
        .expect("services should be bound");

    for service in services {
        println!("{}", service.hello());
    }
}
