use crate::LoadError;

/// One-shot delivery token for an eventual load result.
///
/// Consuming `self` on delivery makes double completion unrepresentable;
/// dropping the token without resolving simply means the result never
/// arrives (the slot stays `Pending`).
pub struct Completion<T> {
    deliver: Box<dyn FnOnce(Result<T, LoadError>)>,
}

impl<T> Completion<T> {
    pub fn new(deliver: impl FnOnce(Result<T, LoadError>) + 'static) -> Self {
        Self {
            deliver: Box::new(deliver),
        }
    }

    pub fn resolve(self, result: Result<T, LoadError>) {
        (self.deliver)(result)
    }

    pub fn ok(self, value: T) {
        self.resolve(Ok(value))
    }

    pub fn fail(self, cause: impl Into<String>) {
        self.resolve(Err(LoadError::new(cause)))
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Completion")
    }
}

/// External collaborator: given an id, eventually produce a value or a
/// failure. One call per load request; no retry, no caching implied.
///
/// Loaders may hold the token and fire it at any later point of the
/// cooperative schedule, so completions for separate requests arrive in
/// any relative order. Synchronous delivery inside `load` is also legal.
pub trait EntityLoader<T> {
    fn load(&self, id: &str, done: Completion<T>);
}

impl<T, F> EntityLoader<T> for F
where
    F: Fn(&str, Completion<T>),
{
    fn load(&self, id: &str, done: Completion<T>) {
        self(id, done)
    }
}
