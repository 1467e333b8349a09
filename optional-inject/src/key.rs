use std::{
    any::{self, TypeId},
    borrow::Cow,
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

/// Represents a type used as a service identifier.
#[derive(Clone, Copy, Debug)]
pub struct Type {
    /// The name of the type.
    pub name: &'static str,
    /// The unique identifier of the type.
    pub id: TypeId,
}

impl Type {
    /// Creates the type-tag of `T`.
    pub fn new<T: 'static>() -> Type {
        Type {
            name: any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A symbolic service identifier that is equal only to itself.
///
/// Two tokens created with the same label are distinct identifiers;
/// the label is carried for diagnostics only.
///
/// # Example
///
/// ```rust
/// use optional_inject::Token;
///
/// let token = Token::new("multi-id");
/// let copy = token;
///
/// assert_eq!(token, copy);
/// assert_ne!(token, Token::new("multi-id"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    id: u64,
    label: &'static str,
}

impl Token {
    /// Creates a new unique token with the given label.
    pub fn new(label: &'static str) -> Token {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);

        Token {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            label,
        }
    }

    /// Returns the label the token was created with.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// An opaque key under which one or more implementations are registered
/// in a container.
///
/// Containers are free to interpret the variants however they like; the
/// only requirement is that identifiers compare as values, so two equal
/// `ServiceId`s refer to the same group of bindings. `ServiceId`
/// implements [`Eq`] and [`Hash`] so containers can dispatch on it with a
/// plain map lookup.
///
/// # Example
///
/// ```rust
/// use optional_inject::{ServiceId, Token};
///
/// struct Logger;
///
/// let by_type = ServiceId::of::<Logger>();
/// let by_name = ServiceId::name("logger");
/// let by_token = ServiceId::from(Token::new("logger"));
///
/// assert_eq!(by_type, ServiceId::of::<Logger>());
/// assert_ne!(by_name, by_token);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ServiceId {
    /// Identifies bindings by a Rust type.
    Type(Type),
    /// Identifies bindings by a string name.
    Name(Cow<'static, str>),
    /// Identifies bindings by a unique token.
    Token(Token),
}

impl ServiceId {
    /// Creates a type identifier from `T`.
    pub fn of<T: 'static>() -> ServiceId {
        ServiceId::Type(Type::new::<T>())
    }

    /// Creates a name identifier.
    pub fn name(name: impl Into<Cow<'static, str>>) -> ServiceId {
        ServiceId::Name(name.into())
    }
}

impl From<Type> for ServiceId {
    fn from(ty: Type) -> Self {
        ServiceId::Type(ty)
    }
}

impl From<Token> for ServiceId {
    fn from(token: Token) -> Self {
        ServiceId::Token(token)
    }
}

impl From<&'static str> for ServiceId {
    fn from(name: &'static str) -> Self {
        ServiceId::Name(Cow::Borrowed(name))
    }
}

impl From<String> for ServiceId {
    fn from(name: String) -> Self {
        ServiceId::Name(Cow::Owned(name))
    }
}
