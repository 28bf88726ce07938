/// Callback list for state changes. Renderers subscribe; services publish
/// after each mutation, on the thread that owns the service.
pub struct Subscribers<E> {
    callbacks: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&E) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn publish(&mut self, event: &E) {
        for callback in &mut self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}
