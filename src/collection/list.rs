//! VirtualList - buffered view over an engine collection.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use spark_signals::{signal, Signal};
use tracing::{debug, trace, warn};

use crate::config::PrefetchConfig;
use crate::engine::{CollectionSource, ItemId, ViewHandle};

use super::{Spawner, ThreadSpawner};

/// Ids loaded off the host thread, waiting to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchBatch {
    /// List generation the batch was requested for.
    pub generation: u64,
    /// Buffer index of the first id.
    pub start: usize,
    pub ids: Vec<ItemId>,
}

/// A growable, randomly indexable list backed by a [`CollectionSource`].
///
/// `get(i)` answers from the local buffer when `i` is loaded and falls back
/// to the source otherwise. Touching an index within `threshold` of the
/// loaded end schedules one batch of up to `batch_size` ids; further
/// triggers are ignored until that batch has been applied by [`poll`].
///
/// [`poll`]: VirtualList::poll
pub struct VirtualList<S: CollectionSource> {
    source: Arc<S>,
    buffer: Vec<ItemId>,
    in_flight: bool,
    generation: u64,
    sender: Sender<PrefetchBatch>,
    receiver: Receiver<PrefetchBatch>,
    loaded: Signal<usize>,
    config: PrefetchConfig,
    spawner: Box<dyn Spawner>,
}

impl<S: CollectionSource> VirtualList<S> {
    /// Background-threaded list with default prefetch settings.
    pub fn new(source: S) -> Self {
        Self::with_spawner(Arc::new(source), PrefetchConfig::default(), ThreadSpawner)
    }

    /// Build a list and load the initial batch synchronously.
    pub fn with_spawner(
        source: Arc<S>,
        config: PrefetchConfig,
        spawner: impl Spawner + 'static,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut list = Self {
            source,
            buffer: Vec::new(),
            in_flight: false,
            generation: 0,
            sender,
            receiver,
            loaded: signal(0),
            config,
            spawner: Box::new(spawner),
        };
        list.load_initial();
        list
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Id at `index`, or `None` past the end of the source.
    pub fn get(&mut self, index: usize) -> Option<ItemId> {
        self.poll();
        if index >= self.fit_to_source() {
            return None;
        }

        let id = match self.buffer.get(index) {
            Some(id) => *id,
            None => {
                trace!(index, loaded = self.buffer.len(), "reading unloaded id from source");
                self.source.id_at(index)
            }
        };

        self.maybe_prefetch(index);
        Some(id)
    }

    /// Fresh view handle for the element at `index`.
    ///
    /// Counts as an access for prefetching.
    pub fn view(&mut self, index: usize) -> Option<ViewHandle> {
        self.poll();
        if index >= self.fit_to_source() {
            return None;
        }
        self.maybe_prefetch(index);
        self.source.view_at(index)
    }

    /// Element count the source currently reports.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Number of ids held locally.
    pub fn loaded_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn loaded_ids(&self) -> &[ItemId] {
        &self.buffer
    }

    /// Whether a batch has been requested and not yet applied.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Loaded length, updated each time a batch is applied.
    pub fn loaded_signal(&self) -> Signal<usize> {
        self.loaded.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Apply every batch that has arrived. Returns the number of ids added.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(batch) = self.receiver.try_recv() {
            if batch.generation != self.generation {
                warn!(
                    batch = batch.generation,
                    current = self.generation,
                    "discarding prefetch batch from before reset"
                );
                continue;
            }

            self.in_flight = false;
            if batch.start != self.buffer.len() {
                warn!(
                    start = batch.start,
                    loaded = self.buffer.len(),
                    "discarding misaligned prefetch batch"
                );
                continue;
            }

            debug!(start = batch.start, count = batch.ids.len(), "prefetch batch applied");
            applied += batch.ids.len();
            self.buffer.extend(batch.ids);
        }

        if applied > 0 {
            self.loaded.set(self.buffer.len());
        }
        applied
    }

    /// Drop every loaded id and start over from the initial batch.
    ///
    /// A batch still in flight is discarded when it arrives.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = false;
        self.buffer.clear();
        self.load_initial();
    }

    /// Drop loaded ids past the source's current count. Returns that count.
    fn fit_to_source(&mut self) -> usize {
        let total = self.source.len();
        if self.buffer.len() > total {
            debug!(loaded = self.buffer.len(), total, "source shrank; truncating loaded ids");
            self.buffer.truncate(total);
            self.loaded.set(total);
        }
        total
    }

    fn load_initial(&mut self) {
        let count = self.config.initial_batch.min(self.source.len());
        self.buffer.extend((0..count).map(|index| self.source.id_at(index)));
        self.loaded.set(self.buffer.len());
    }

    fn maybe_prefetch(&mut self, index: usize) {
        let loaded = self.buffer.len();
        let total = self.source.len();

        if loaded >= total || index.saturating_add(self.config.threshold) < loaded {
            return;
        }
        if self.in_flight {
            trace!(index, "prefetch already in flight");
            return;
        }

        let start = loaded;
        let count = self.config.batch_size.min(total - loaded);
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        trace!(index, start, count, "scheduling prefetch");
        self.in_flight = true;
        let job = Box::new(move || {
            let ids = (start..start + count).map(|i| source.id_at(i)).collect();
            // The list may already be gone; nothing to deliver to then.
            let _ = sender.send(PrefetchBatch {
                generation,
                start,
                ids,
            });
        });

        if let Err(err) = self.spawner.spawn(job) {
            warn!(%err, "failed to spawn prefetch job");
            self.in_flight = false;
        }
    }
}

impl<S: CollectionSource> fmt::Debug for VirtualList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("len", &self.source.len())
            .field("loaded", &self.buffer.len())
            .field("in_flight", &self.in_flight)
            .field("generation", &self.generation)
            .finish()
    }
}
