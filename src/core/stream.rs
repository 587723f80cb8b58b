use std::fmt;
use std::sync::Arc;

type Generator<T> = Arc<dyn Fn() -> Box<dyn Iterator<Item = T>>>;

/// A lazy, re-iterable sequence of records.
///
/// Nothing is produced until the stream is iterated, and every call to
/// [`DataStream::iter`] starts a fresh pass from the beginning.
pub struct DataStream<T> {
    generator: Generator<T>,
}

impl<T: 'static> DataStream<T> {
    /// Build a stream from a function that yields a new iterator per pass.
    pub fn from_fn<F, I>(generator: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        Self {
            generator: Arc::new(move || Box::new(generator()) as Box<dyn Iterator<Item = T>>),
        }
    }

    /// Build a stream over anything that can be cloned and iterated, such as a `Vec`.
    pub fn from_iterable<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::from_fn(move || items.clone().into_iter())
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        (self.generator)()
    }

    /// Lazily apply `f` to every item of each future pass.
    pub fn map<U, F>(&self, f: F) -> DataStream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let generator = Arc::clone(&self.generator);
        let f = Arc::new(f);
        DataStream::from_fn(move || {
            let f = Arc::clone(&f);
            generator().map(move |item| f(item))
        })
    }
}

impl<T> Clone for DataStream<T> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<T> fmt::Debug for DataStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStream").finish_non_exhaustive()
    }
}

impl<T: 'static> IntoIterator for &DataStream<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
