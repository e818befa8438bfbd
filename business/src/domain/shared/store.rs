use tokio::sync::watch;

/// Observable in-memory state container shared by the client stores.
///
/// Every mutation is applied to the latest value while the channel lock is
/// held, so two updates dispatched back to back always compose. Observers are
/// only woken when the mutation reports that it changed something.
pub struct Store<S> {
    sender: watch::Sender<S>,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Applies `mutate` to the current value. The closure returns whether it
    /// modified the state; the return value of `update` mirrors it.
    pub fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut S) -> bool,
    {
        self.sender.send_if_modified(mutate)
    }

    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Reads the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
