use std::{any::Any, collections::HashMap};

use optional_inject::{resolve_all_option, resolve_all_option_or_else, Container, ServiceId, Token};

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
    registry.bind("default-greeting", "Hello!");

    // nothing is bound to this token, so the fallback substitutes the
    // default greeting resolved from the same container
    let greetings = Token::new("greetings");
    let resolved = resolve_all_option_or_else::<&str, _, _>(&mut registry, greetings, |registry| {
        resolve_all_option(registry, "default-greeting")
    });

    match resolved {
        Some(greetings) => {
            for greeting in greetings {
                println!("{}", greeting);
            }
        }
        None => println!("no greeting bound"),
    }
}
